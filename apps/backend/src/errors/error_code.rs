//! Error codes for the BizTime API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

/// Centralized, machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General validation error
    ValidationError,
    /// Company name missing or unusable for a code
    InvalidCompanyName,
    /// Explicit company code is blank
    InvalidCompanyCode,
    /// Invoice id in the path is not an integer
    InvalidInvoiceId,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// No company with the given code (or no companies at all)
    CompanyNotFound,
    /// No invoice with the given id (or no invoices at all)
    InvoiceNotFound,
    /// No route matched
    NotFound,

    // Conflicts
    /// Company code already in use
    CompanyCodeTaken,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // Database Constraint Violations
    /// Unique constraint violation (generic 409)
    UniqueViolation,
    /// Foreign key constraint violation (generic 409)
    FkViolation,
    /// Check constraint violation (generic 400)
    CheckViolation,

    // System Errors
    /// Unclassified database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,
    /// Configuration error
    ConfigError,
    /// Stored data violates an invariant the API relies on
    DataCorruption,
}

impl ErrorCode {
    /// Every variant, in declaration order.
    pub const ALL: [ErrorCode; 18] = [
        Self::ValidationError,
        Self::InvalidCompanyName,
        Self::InvalidCompanyCode,
        Self::InvalidInvoiceId,
        Self::BadRequest,
        Self::CompanyNotFound,
        Self::InvoiceNotFound,
        Self::NotFound,
        Self::CompanyCodeTaken,
        Self::Conflict,
        Self::UniqueViolation,
        Self::FkViolation,
        Self::CheckViolation,
        Self::DbError,
        Self::DbUnavailable,
        Self::DbTimeout,
        Self::ConfigError,
        Self::DataCorruption,
    ];

    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidCompanyName => "INVALID_COMPANY_NAME",
            Self::InvalidCompanyCode => "INVALID_COMPANY_CODE",
            Self::InvalidInvoiceId => "INVALID_INVOICE_ID",
            Self::BadRequest => "BAD_REQUEST",

            Self::CompanyNotFound => "COMPANY_NOT_FOUND",
            Self::InvoiceNotFound => "INVOICE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::CompanyCodeTaken => "COMPANY_CODE_TAKEN",
            Self::Conflict => "CONFLICT",

            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::FkViolation => "FK_VIOLATION",
            Self::CheckViolation => "CHECK_VIOLATION",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(
            ErrorCode::InvalidCompanyName.as_str(),
            "INVALID_COMPANY_NAME"
        );
        assert_eq!(ErrorCode::InvalidInvoiceId.as_str(), "INVALID_INVOICE_ID");
        assert_eq!(ErrorCode::CompanyNotFound.as_str(), "COMPANY_NOT_FOUND");
        assert_eq!(ErrorCode::InvoiceNotFound.as_str(), "INVOICE_NOT_FOUND");
        assert_eq!(ErrorCode::CompanyCodeTaken.as_str(), "COMPANY_CODE_TAKEN");
        assert_eq!(ErrorCode::FkViolation.as_str(), "FK_VIOLATION");
        assert_eq!(ErrorCode::CheckViolation.as_str(), "CHECK_VIOLATION");
        assert_eq!(ErrorCode::DbError.as_str(), "DB_ERROR");
        assert_eq!(ErrorCode::DbUnavailable.as_str(), "DB_UNAVAILABLE");
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", ErrorCode::NotFound), "NOT_FOUND");
        assert_eq!(
            format!("{}", ErrorCode::UniqueViolation),
            "UNIQUE_VIOLATION"
        );
    }

    #[test]
    fn test_codes_are_unique_and_screaming_snake() {
        let mut seen = HashSet::new();
        for code in ErrorCode::ALL {
            let s = code.as_str();
            assert!(seen.insert(s), "Duplicate error code string: {s}");
            assert!(
                s.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "{s} is not SCREAMING_SNAKE_CASE"
            );
        }
    }
}
