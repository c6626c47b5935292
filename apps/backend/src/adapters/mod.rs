//! SeaORM adapters: one module per table, returning `DbErr`.

pub mod companies_sea;
pub mod invoices_sea;
