pub mod companies;
pub mod invoices;

pub use companies::Entity as Companies;
pub use companies::Model as Company;
pub use invoices::Entity as Invoices;
pub use invoices::Model as Invoice;
