//! Repository layer for invoices.

use sea_orm::ConnectionTrait;
use time::{Date, OffsetDateTime};

use crate::adapters::invoices_sea::{self as adapter, InvoiceCreate};
use crate::entities::invoices;
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: Date,
    pub paid_date: Option<Date>,
}

/// An invoice joined with its owning company.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: Date,
    pub paid_date: Option<Date>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<invoices::Model> for Invoice {
    fn from(model: invoices::Model) -> Self {
        Self {
            id: model.id,
            comp_code: model.comp_code,
            amt: model.amt,
            paid: model.paid,
            add_date: model.add_date,
            paid_date: model.paid_date,
        }
    }
}

fn validate_amount(amt: f64) -> Result<f64, DomainError> {
    if !amt.is_finite() {
        return Err(DomainError::validation(
            ValidationKind::Other("AMOUNT".into()),
            "Invoice amount must be a finite number",
        ));
    }
    Ok(amt)
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Invoice>, DomainError> {
    let rows = adapter::list_all(conn).await?;
    Ok(rows.into_iter().map(Invoice::from).collect())
}

pub async fn find_detail<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<InvoiceDetail>, DomainError> {
    let Some((invoice, company)) = adapter::find_with_company(conn, id).await? else {
        return Ok(None);
    };
    let company = company.ok_or_else(|| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!(
                "invoice {id} references missing company '{}'",
                invoice.comp_code
            ),
        )
    })?;

    Ok(Some(InvoiceDetail {
        id: invoice.id,
        amt: invoice.amt,
        paid: invoice.paid,
        add_date: invoice.add_date,
        paid_date: invoice.paid_date,
        code: company.code,
        name: company.name,
        description: company.description,
    }))
}

/// Insert with `paid = false`, no `paid_date`, and today's UTC date.
///
/// A non-positive `amt` is rejected by the store's check constraint and an
/// unknown `comp_code` by its foreign key.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    comp_code: &str,
    amt: f64,
) -> Result<Invoice, DomainError> {
    let dto = InvoiceCreate {
        comp_code: comp_code.to_string(),
        amt: validate_amount(amt)?,
        add_date: OffsetDateTime::now_utc().date(),
    };
    Ok(Invoice::from(adapter::create_invoice(conn, dto).await?))
}

/// Change only the amount; `None` when `id` does not exist.
pub async fn update_amount<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    amt: f64,
) -> Result<Option<Invoice>, DomainError> {
    let amt = validate_amount(amt)?;
    Ok(adapter::update_amount(conn, id, amt)
        .await?
        .map(Invoice::from))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<bool, DomainError> {
    Ok(adapter::delete_invoice(conn, id).await? > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_amount_is_rejected() {
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
        assert_eq!(validate_amount(12.5).unwrap(), 12.5);
    }
}
