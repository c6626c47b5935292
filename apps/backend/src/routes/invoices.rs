use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::companies::DeletedResponse;
use crate::db::require_db;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::extractors::{InvoiceId, ValidatedJson};
use crate::repos::invoices::{self, Invoice, InvoiceDetail};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: String,
    pub paid_date: Option<String>,
}

impl From<Invoice> for InvoiceResponse {
    fn from(value: Invoice) -> Self {
        Self {
            id: value.id,
            comp_code: value.comp_code,
            amt: value.amt,
            paid: value.paid,
            add_date: value.add_date.to_string(),
            paid_date: value.paid_date.map(|d| d.to_string()),
        }
    }
}

/// Invoice fields plus the owning company, flattened
#[derive(Debug, Serialize)]
pub struct InvoiceDetailResponse {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: String,
    pub paid_date: Option<String>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<InvoiceDetail> for InvoiceDetailResponse {
    fn from(value: InvoiceDetail) -> Self {
        Self {
            id: value.id,
            amt: value.amt,
            paid: value.paid,
            add_date: value.add_date.to_string(),
            paid_date: value.paid_date.map(|d| d.to_string()),
            code: value.code,
            name: value.name,
            description: value.description,
        }
    }
}

#[derive(Debug, Serialize)]
struct InvoicesEnvelope {
    invoices: Vec<InvoiceResponse>,
}

#[derive(Debug, Serialize)]
struct InvoiceEnvelope<T: Serialize> {
    invoice: T,
}

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    pub comp_code: String,
    pub amt: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInvoiceRequest {
    pub amt: f64,
}

fn invoice_not_found(id: i32) -> AppError {
    DomainError::not_found(
        NotFoundKind::Invoice,
        format!("Invoice with id {id} not found"),
    )
    .into()
}

async fn list_invoices(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let rows = invoices::list_all(db).await?;
    if rows.is_empty() {
        return Err(DomainError::not_found(NotFoundKind::Invoice, "No invoices found").into());
    }

    Ok(HttpResponse::Ok().json(InvoicesEnvelope {
        invoices: rows.into_iter().map(InvoiceResponse::from).collect(),
    }))
}

async fn get_invoice(
    id: InvoiceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let detail = invoices::find_detail(db, id.0)
        .await?
        .ok_or_else(|| invoice_not_found(id.0))?;

    Ok(HttpResponse::Ok().json(InvoiceEnvelope {
        invoice: InvoiceDetailResponse::from(detail),
    }))
}

async fn create_invoice(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateInvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let db = require_db(&app_state)?;
    let invoice = invoices::create(db, &payload.comp_code, payload.amt).await?;

    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "invoice.created");

    Ok(HttpResponse::Created().json(InvoiceEnvelope {
        invoice: InvoiceResponse::from(invoice),
    }))
}

async fn update_invoice(
    id: InvoiceId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<UpdateInvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let db = require_db(&app_state)?;
    let invoice = invoices::update_amount(db, id.0, payload.amt)
        .await?
        .ok_or_else(|| invoice_not_found(id.0))?;

    Ok(HttpResponse::Ok().json(InvoiceEnvelope {
        invoice: InvoiceResponse::from(invoice),
    }))
}

async fn delete_invoice(
    id: InvoiceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    if !invoices::delete(db, id.0).await? {
        return Err(invoice_not_found(id.0));
    }

    Ok(HttpResponse::Ok().json(DeletedResponse::deleted()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_invoices))
            .route(web::post().to(create_invoice)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_invoice))
            .route(web::put().to(update_invoice))
            .route(web::delete().to(delete_invoice)),
    );
}
