use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod companies;
pub mod health;
pub mod invoices;

/// Register every route. Shared by `main.rs` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Companies: /companies, /companies/{code}
    cfg.service(web::scope("/companies").configure(companies::configure_routes));

    // Invoices: /invoices, /invoices/{id}
    cfg.service(web::scope("/invoices").configure(invoices::configure_routes));
}

/// Fallback for unmatched paths so they also render as problem details.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(
        ErrorCode::NotFound,
        format!("No route for {} {}", req.method(), req.path()),
    ))
}
