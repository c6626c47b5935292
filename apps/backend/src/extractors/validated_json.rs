use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// JSON body extractor whose failures render as problem details
///
/// Parse failures become HTTP 400: malformed JSON uses `BAD_REQUEST`,
/// well-formed JSON with missing or mistyped fields uses `VALIDATION_ERROR`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    /// Extract the inner value from the ValidatedJson wrapper
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        let mut payload = payload.take();

        // Extract content type before creating the async future to avoid borrow-across-await
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("")
            .to_string();

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            // Collect the request body into BytesMut
            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(
                        trace_id = %trace_id,
                        error = %e,
                        "Failed to read request body chunk"
                    );
                    AppError::bad_request(
                        ErrorCode::BadRequest,
                        "Failed to read request body".to_string(),
                    )
                })?;
                body.extend_from_slice(&chunk);
            }

            // Attempt to parse JSON
            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                let (code, detail) = classify_json_error(&e);

                debug!(
                    trace_id = %trace_id,
                    error = %Redacted(&e.to_string()),
                    content_type = %content_type,
                    body_size = body.len(),
                    "JSON parsing failed"
                );

                AppError::bad_request(code, detail)
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

/// Classify serde_json::Error into an error code and a sanitized message
fn classify_json_error(error: &JsonError) -> (ErrorCode, String) {
    match error.classify() {
        serde_json::error::Category::Syntax => {
            let line = error.line();
            (ErrorCode::BadRequest, format!("Invalid JSON at line {line}"))
        }
        serde_json::error::Category::Eof => (
            ErrorCode::BadRequest,
            "Invalid JSON: unexpected end of input".to_string(),
        ),
        serde_json::error::Category::Data => (
            ErrorCode::ValidationError,
            "Invalid JSON: missing or wrong types for one or more fields".to_string(),
        ),
        serde_json::error::Category::Io => (
            ErrorCode::BadRequest,
            "Invalid JSON: I/O error while reading body".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct TestStruct {
        pub comp_code: String,
        pub amt: f64,
    }

    #[test]
    fn test_classify_json_error_syntax() {
        let json = r#"{"comp_code": "apple", "amt": }"#;
        let error = serde_json::from_str::<TestStruct>(json).unwrap_err();
        let (code, detail) = classify_json_error(&error);
        assert_eq!(code, ErrorCode::BadRequest);
        assert!(detail.contains("Invalid JSON at line 1"));
    }

    #[test]
    fn test_classify_json_error_eof() {
        let json = r#"{"comp_code": "apple""#;
        let error = serde_json::from_str::<TestStruct>(json).unwrap_err();
        let (code, detail) = classify_json_error(&error);
        assert_eq!(code, ErrorCode::BadRequest);
        assert!(detail.contains("unexpected end of input"));
    }

    #[test]
    fn test_classify_json_error_data() {
        let json = r#"{"comp_code": 123, "amt": "invalid"}"#;
        let error = serde_json::from_str::<TestStruct>(json).unwrap_err();
        let (code, detail) = classify_json_error(&error);
        assert_eq!(code, ErrorCode::ValidationError);
        assert!(detail.contains("wrong types"));
    }

    #[test]
    fn test_classify_json_error_missing_field() {
        let json = r#"{"comp_code": "apple"}"#;
        let error = serde_json::from_str::<TestStruct>(json).unwrap_err();
        let (code, _) = classify_json_error(&error);
        assert_eq!(code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_validated_json_deref_and_into_inner() {
        let mut validated = ValidatedJson(TestStruct {
            comp_code: "apple".to_string(),
            amt: 100.0,
        });
        assert_eq!(validated.comp_code, "apple");

        validated.amt = 250.5;
        let inner = validated.into_inner();
        assert_eq!(inner.amt, 250.5);
    }
}
