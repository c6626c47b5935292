//! SeaORM -> DomainError translation.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it into
//! `crate::errors::domain::DomainError` here, and handlers then map
//! `DomainError` to `AppError` via `From`.

use sea_orm::{ConnAcquireErr, DbErr, SqlErr};
use tracing::{error, warn};

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(&format!("SQLSTATE({code})")) || msg.contains(&format!("code: {code}"))
}

/// Constraint identifiers for the company primary key.
/// Postgres reports the constraint name, SQLite reports `table.column`.
fn is_company_code_constraint(msg: &str) -> bool {
    msg.contains("companies_pkey") || msg.contains("companies.code")
}

fn unique_violation(msg: &str) -> DomainError {
    if is_company_code_constraint(msg) {
        return DomainError::conflict(ConflictKind::CompanyCode, "Company code already exists");
    }
    DomainError::conflict(
        ConflictKind::Other("Unique".into()),
        "Unique constraint violation",
    )
}

fn foreign_key_violation() -> DomainError {
    DomainError::conflict(
        ConflictKind::ForeignKey,
        "Referenced company does not exist",
    )
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database pool timeout");
            return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&msg), "Unique constraint violation");
            return unique_violation(&msg);
        }
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&msg), "Foreign key constraint violation");
            return foreign_key_violation();
        }
        _ => {}
    }

    // Fallbacks for drivers/messages `sql_err` does not classify.
    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");
        return unique_violation(&error_msg);
    }

    if mentions_sqlstate(&error_msg, "23503")
        || error_msg.contains("violates foreign key constraint")
        || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return foreign_key_violation();
    }

    if mentions_sqlstate(&error_msg, "23514")
        || error_msg.contains("violates check constraint")
        || error_msg.contains("CHECK constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Check constraint violation");
        return DomainError::validation(
            ValidationKind::CheckConstraint,
            "Check constraint violation: amt must be greater than zero",
        );
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        map_db_err(e)
    }
}
