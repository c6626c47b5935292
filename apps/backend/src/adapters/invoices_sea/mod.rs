//! SeaORM adapter for the invoices table.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::{companies, invoices};

pub mod dto;

pub use dto::InvoiceCreate;

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<invoices::Model>, sea_orm::DbErr> {
    invoices::Entity::find()
        .order_by_asc(invoices::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<invoices::Model>, sea_orm::DbErr> {
    invoices::Entity::find_by_id(id).one(conn).await
}

/// Single joined read: the invoice and its owning company.
pub async fn find_with_company<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<(invoices::Model, Option<companies::Model>)>, sea_orm::DbErr> {
    invoices::Entity::find_by_id(id)
        .find_also_related(companies::Entity)
        .one(conn)
        .await
}

/// `(comp_code, id)` pairs for every invoice owned by one of `codes`, ordered by id.
pub async fn ids_for_codes<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    codes: &[String],
) -> Result<Vec<(String, i32)>, sea_orm::DbErr> {
    if codes.is_empty() {
        return Ok(Vec::new());
    }

    invoices::Entity::find()
        .select_only()
        .column(invoices::Column::CompCode)
        .column(invoices::Column::Id)
        .filter(invoices::Column::CompCode.is_in(codes.iter().cloned()))
        .order_by_asc(invoices::Column::Id)
        .into_tuple::<(String, i32)>()
        .all(conn)
        .await
}

pub async fn create_invoice<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: InvoiceCreate,
) -> Result<invoices::Model, sea_orm::DbErr> {
    let active = invoices::ActiveModel {
        id: NotSet,
        comp_code: Set(dto.comp_code),
        amt: Set(dto.amt),
        paid: Set(false),
        add_date: Set(dto.add_date),
        paid_date: Set(None),
    };

    active.insert(conn).await
}

/// Change only `amt`. Returns `None` when no row has `id`.
pub async fn update_amount<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    amt: f64,
) -> Result<Option<invoices::Model>, sea_orm::DbErr> {
    let result = invoices::Entity::update_many()
        .col_expr(invoices::Column::Amt, Expr::value(amt))
        .filter(invoices::Column::Id.eq(id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Ok(None);
    }

    find_by_id(conn, id).await
}

/// Delete by id; returns rows affected (0 or 1).
pub async fn delete_invoice<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = invoices::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}
