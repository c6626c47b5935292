pub mod invoice_id;
pub mod validated_json;

pub use invoice_id::InvoiceId;
pub use validated_json::ValidatedJson;
