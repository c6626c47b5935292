//! DTOs for invoices_sea adapter.

use time::Date;

/// DTO for inserting an invoice row. `paid` starts false, `paid_date` null.
#[derive(Debug, Clone)]
pub struct InvoiceCreate {
    pub comp_code: String,
    pub amt: f64,
    pub add_date: Date,
}
