use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::extractors::ValidatedJson;
use crate::repos::companies::{self, Company, CompanyChanges, CompanyWithInvoices, NewCompany};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<Company> for CompanyResponse {
    fn from(value: Company) -> Self {
        Self {
            code: value.code,
            name: value.name,
            description: value.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompanyListItem {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<i32>,
}

impl From<CompanyWithInvoices> for CompanyListItem {
    fn from(value: CompanyWithInvoices) -> Self {
        Self {
            code: value.company.code,
            name: value.company.name,
            description: value.company.description,
            invoices: value.invoices,
        }
    }
}

#[derive(Debug, Serialize)]
struct CompaniesEnvelope {
    companies: Vec<CompanyListItem>,
}

#[derive(Debug, Serialize)]
struct CompanyEnvelope {
    company: CompanyResponse,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeletedResponse {
    pub status: &'static str,
}

impl DeletedResponse {
    pub(crate) fn deleted() -> Self {
        Self { status: "deleted" }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    #[serde(default)]
    pub code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCompanyRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

fn company_not_found(code: &str) -> AppError {
    DomainError::not_found(
        NotFoundKind::Company,
        format!("Company with code {code} not found"),
    )
    .into()
}

async fn list_companies(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let rows = companies::list_with_invoices(db).await?;
    if rows.is_empty() {
        return Err(DomainError::not_found(NotFoundKind::Company, "Companies not found").into());
    }

    Ok(HttpResponse::Ok().json(CompaniesEnvelope {
        companies: rows.into_iter().map(CompanyListItem::from).collect(),
    }))
}

async fn get_company(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    let db = require_db(&app_state)?;
    let company = companies::find_by_code(db, &code)
        .await?
        .ok_or_else(|| company_not_found(&code))?;

    Ok(HttpResponse::Ok().json(CompanyEnvelope {
        company: company.into(),
    }))
}

async fn create_company(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateCompanyRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let db = require_db(&app_state)?;
    let company = companies::create(
        db,
        NewCompany {
            code: payload.code,
            name: payload.name,
            description: payload.description,
        },
    )
    .await?;

    tracing::info!(code = %company.code, "company.created");

    Ok(HttpResponse::Created().json(CompanyEnvelope {
        company: company.into(),
    }))
}

async fn update_company(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<UpdateCompanyRequest>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    let payload = body.into_inner();
    let db = require_db(&app_state)?;
    let company = companies::update(
        db,
        &code,
        CompanyChanges {
            name: payload.name,
            description: payload.description,
        },
    )
    .await?
    .ok_or_else(|| company_not_found(&code))?;

    Ok(HttpResponse::Ok().json(CompanyEnvelope {
        company: company.into(),
    }))
}

async fn delete_company(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    let db = require_db(&app_state)?;
    if !companies::delete(db, &code).await? {
        return Err(company_not_found(&code));
    }

    tracing::info!(code = %code, "company.deleted");

    Ok(HttpResponse::Ok().json(DeletedResponse::deleted()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_companies))
            .route(web::post().to(create_company)),
    )
    .service(
        web::resource("/{code}")
            .route(web::get().to(get_company))
            .route(web::put().to(update_company))
            .route(web::delete().to(delete_company)),
    );
}
