// Unit tests for DomainError -> AppError mapping; no HTTP server or database involved.
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation(ValidationKind::CompanyName, "name is required");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidCompanyName);
    assert_eq!(app.status().as_u16(), 400);

    let check = DomainError::validation(ValidationKind::CheckConstraint, "amt must be positive");
    let app: AppError = check.into();
    assert_eq!(app.code(), ErrorCode::CheckViolation);
    assert_eq!(app.status().as_u16(), 400);

    let other = DomainError::validation(ValidationKind::Other("FIELD".into()), "bad field");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
}

#[test]
fn maps_conflicts() {
    let taken = DomainError::conflict(ConflictKind::CompanyCode, "code taken");
    let app: AppError = taken.into();
    assert_eq!(app.code().as_str(), "COMPANY_CODE_TAKEN");
    assert_eq!(app.status().as_u16(), 409);

    let fk = DomainError::conflict(ConflictKind::ForeignKey, "no such company");
    let app: AppError = fk.into();
    assert_eq!(app.code().as_str(), "FK_VIOLATION");
    assert_eq!(app.status().as_u16(), 409);

    let unique = DomainError::conflict(ConflictKind::Other("Unique".into()), "dup");
    let app: AppError = unique.into();
    assert_eq!(app.code().as_str(), "UNIQUE_VIOLATION");

    let other = DomainError::conflict(ConflictKind::Other("whatever".into()), "generic");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let company = DomainError::not_found(NotFoundKind::Company, "no company");
    let app: AppError = company.into();
    assert_eq!(app.code().as_str(), "COMPANY_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let invoice = DomainError::not_found(NotFoundKind::Invoice, "no invoice");
    let app: AppError = invoice.into();
    assert_eq!(app.code().as_str(), "INVOICE_NOT_FOUND");
    assert_eq!(app.detail(), "no invoice");
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let corr = DomainError::infra(InfraErrorKind::DataCorruption, "orphan invoice");
    let app: AppError = corr.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    // Unclassified store failures default to 500 with their message intact
    let other = DomainError::infra(InfraErrorKind::Other("DbErr".into()), "Database operation failed");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
    assert_eq!(app.status().as_u16(), 500);
    assert_eq!(app.detail(), "Database operation failed");
}

#[test]
fn record_not_found_db_err_maps_to_404() {
    let app: AppError = sea_orm::DbErr::RecordNotFound("companies".into()).into();
    assert_eq!(app.status().as_u16(), 404);
    assert_eq!(app.code(), ErrorCode::NotFound);
}
