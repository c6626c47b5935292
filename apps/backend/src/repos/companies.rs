//! Repository layer for companies.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::adapters::companies_sea::{self as adapter, CompanyCreate, CompanyUpdate};
use crate::adapters::invoices_sea;
use crate::entities::companies;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::utils::slug::slugify;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// A company with the ids of the invoices it owns (derived on read).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyWithInvoices {
    pub company: Company,
    pub invoices: Vec<i32>,
}

/// Input for creating a company. `code` is derived from `name` when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCompany {
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyChanges {
    pub name: String,
    pub description: Option<String>,
}

impl From<companies::Model> for Company {
    fn from(model: companies::Model) -> Self {
        Self {
            code: model.code,
            name: model.name,
            description: model.description,
        }
    }
}

/// A blank name is rejected; a valid one is stored exactly as given.
fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation(
            ValidationKind::CompanyName,
            "Company name must not be empty",
        ));
    }
    Ok(())
}

/// Explicit code is used verbatim; otherwise the slug of `name`.
pub fn resolve_code(code: Option<&str>, name: &str) -> Result<String, DomainError> {
    match code {
        Some(code) if code.trim().is_empty() => Err(DomainError::validation(
            ValidationKind::CompanyCode,
            "Company code must not be empty",
        )),
        Some(code) => Ok(code.to_string()),
        None => {
            let slug = slugify(name);
            if slug.is_empty() {
                return Err(DomainError::validation(
                    ValidationKind::CompanyName,
                    format!("Cannot derive a company code from name '{name}'"),
                ));
            }
            Ok(slug)
        }
    }
}

/// All companies ordered by code, each with its invoice ids.
///
/// Invoice ids come from one batched read after the company read. The two
/// reads are not atomic; a company whose invoices vanish in between simply
/// gets an empty list.
pub async fn list_with_invoices<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<CompanyWithInvoices>, DomainError> {
    let rows = adapter::list_all(conn).await?;
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let codes: Vec<String> = rows.iter().map(|c| c.code.clone()).collect();
    let mut ids_by_code: HashMap<String, Vec<i32>> = HashMap::new();
    for (code, id) in invoices_sea::ids_for_codes(conn, &codes).await? {
        ids_by_code.entry(code).or_default().push(id);
    }

    Ok(rows
        .into_iter()
        .map(|model| {
            let invoices = ids_by_code.remove(&model.code).unwrap_or_default();
            CompanyWithInvoices {
                company: Company::from(model),
                invoices,
            }
        })
        .collect())
}

pub async fn find_by_code<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<Option<Company>, DomainError> {
    Ok(adapter::find_by_code(conn, code).await?.map(Company::from))
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    input: NewCompany,
) -> Result<Company, DomainError> {
    validate_name(&input.name)?;
    let code = resolve_code(input.code.as_deref(), &input.name)?;

    let dto = CompanyCreate::new(code.clone(), input.name).with_description(input.description);
    match adapter::create_company(conn, dto).await {
        Ok(model) => Ok(Company::from(model)),
        // companies has no unique key besides its primary key
        Err(e) => match DomainError::from(e) {
            DomainError::Conflict(_, _) => Err(DomainError::conflict(
                ConflictKind::CompanyCode,
                format!("Company code '{code}' is already taken"),
            )),
            other => Err(other),
        },
    }
}

/// Replace name and description; `None` when `code` does not exist.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
    changes: CompanyChanges,
) -> Result<Option<Company>, DomainError> {
    validate_name(&changes.name)?;
    let dto = CompanyUpdate {
        name: changes.name,
        description: changes.description,
    };
    Ok(adapter::update_company(conn, code, dto)
        .await?
        .map(Company::from))
}

/// Returns true when a row was deleted. Owned invoices go with it (FK cascade).
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<bool, DomainError> {
    Ok(adapter::delete_company(conn, code).await? > 0)
}
