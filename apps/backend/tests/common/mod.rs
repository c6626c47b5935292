#![allow(dead_code)]

use biztime::entities::{companies, invoices};
use sea_orm::{ActiveModelTrait, DatabaseConnection, NotSet, Set};
use time::macros::date;

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Ids of the seeded invoices, in insertion order.
#[derive(Debug, Clone, Copy)]
pub struct SeededInvoices {
    pub apple_unpaid: i32,
    pub apple_second: i32,
    pub apple_paid: i32,
    pub ibm_unpaid: i32,
}

async fn insert_company(db: &DatabaseConnection, code: &str, name: &str, description: &str) {
    companies::ActiveModel {
        code: Set(code.to_string()),
        name: Set(name.to_string()),
        description: Set(Some(description.to_string())),
    }
    .insert(db)
    .await
    .expect("seed company");
}

async fn insert_invoice(
    db: &DatabaseConnection,
    comp_code: &str,
    amt: f64,
    paid_date: Option<time::Date>,
) -> i32 {
    invoices::ActiveModel {
        id: NotSet,
        comp_code: Set(comp_code.to_string()),
        amt: Set(amt),
        paid: Set(paid_date.is_some()),
        add_date: Set(date!(2024 - 01 - 15)),
        paid_date: Set(paid_date),
    }
    .insert(db)
    .await
    .expect("seed invoice")
    .id
}

/// Two companies (`apple`, `ibm`) and four invoices.
pub async fn seed(db: &DatabaseConnection) -> SeededInvoices {
    insert_company(db, "apple", "Apple Computer", "Maker of OSX.").await;
    insert_company(db, "ibm", "IBM", "Big blue.").await;

    SeededInvoices {
        apple_unpaid: insert_invoice(db, "apple", 100.0, None).await,
        apple_second: insert_invoice(db, "apple", 200.0, None).await,
        apple_paid: insert_invoice(db, "apple", 300.0, Some(date!(2024 - 02 - 01))).await,
        ibm_unpaid: insert_invoice(db, "ibm", 400.0, None).await,
    }
}
