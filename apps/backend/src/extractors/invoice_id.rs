use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Invoice id parsed from the `{id}` path segment
///
/// Existence is not checked here; handlers report 404 from the row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoiceId(pub i32);

fn parse_invoice_id(raw: Option<&str>) -> Result<InvoiceId, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidInvoiceId, "Missing id parameter")
    })?;

    raw.parse::<i32>().map(InvoiceId).map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidInvoiceId,
            format!("Invalid invoice id: {raw}"),
        )
    })
}

impl FromRequest for InvoiceId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_invoice_id(req.match_info().get("id")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_ids() {
        assert_eq!(parse_invoice_id(Some("42")).unwrap(), InvoiceId(42));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        for raw in ["abc", "1.5", "", "99999999999"] {
            let err = parse_invoice_id(Some(raw)).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidInvoiceId);
        }
    }

    #[test]
    fn missing_segment_is_bad_request() {
        let err = parse_invoice_id(None).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInvoiceId);
    }
}
