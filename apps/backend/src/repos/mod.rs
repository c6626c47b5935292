//! Repository layer: domain models over the SeaORM adapters.

pub mod companies;
pub mod invoices;
