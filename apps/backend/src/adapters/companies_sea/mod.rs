//! SeaORM adapter for the companies table.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::companies;

pub mod dto;

pub use dto::{CompanyCreate, CompanyUpdate};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<companies::Model>, sea_orm::DbErr> {
    companies::Entity::find()
        .order_by_asc(companies::Column::Code)
        .all(conn)
        .await
}

pub async fn find_by_code<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<Option<companies::Model>, sea_orm::DbErr> {
    companies::Entity::find_by_id(code.to_string()).one(conn).await
}

pub async fn create_company<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CompanyCreate,
) -> Result<companies::Model, sea_orm::DbErr> {
    let active = companies::ActiveModel {
        code: Set(dto.code),
        name: Set(dto.name),
        description: Set(dto.description),
    };

    active.insert(conn).await
}

/// Replace name and description. Returns `None` when no row has `code`.
pub async fn update_company<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
    dto: CompanyUpdate,
) -> Result<Option<companies::Model>, sea_orm::DbErr> {
    let result = companies::Entity::update_many()
        .col_expr(companies::Column::Name, Expr::value(dto.name))
        .col_expr(companies::Column::Description, Expr::value(dto.description))
        .filter(companies::Column::Code.eq(code))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Ok(None);
    }

    find_by_code(conn, code).await
}

/// Delete by code; returns rows affected (0 or 1).
pub async fn delete_company<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<u64, sea_orm::DbErr> {
    let result = companies::Entity::delete_by_id(code.to_string())
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
