use std::env;
use std::env::VarError;
use std::str::FromStr;

use biztime::config::db::{DbKind, RuntimeEnv};
use biztime::entities::{companies, invoices};
use biztime::infra::state::{build_state, StateBuilder};
use biztime::state::app_state::AppState;
use biztime::AppError;
use sea_orm::EntityTrait;

/// Store used by integration tests. `BIZTIME_TEST_DB_KIND` overrides the
/// in-memory SQLite default (`postgres` needs `TEST_DB` and credentials).
pub fn resolve_test_db_kind() -> Result<DbKind, AppError> {
    match env::var("BIZTIME_TEST_DB_KIND") {
        Ok(raw) => DbKind::from_str(&raw),
        Err(VarError::NotPresent) => Ok(DbKind::SqliteMemory),
        Err(err) => Err(AppError::config(format!(
            "failed to read BIZTIME_TEST_DB_KIND: {err}"
        ))),
    }
}

pub fn test_state_builder() -> Result<StateBuilder, AppError> {
    let db_kind = resolve_test_db_kind()?;
    Ok(build_state().with_env(RuntimeEnv::Test).with_db(db_kind))
}

/// Migrated store with both tables empty.
///
/// SQLite gets a new in-memory database per call. Postgres runs share the
/// `_test` database, so its rows are wiped here and the suite must run with
/// `--test-threads=1`.
pub async fn build_test_state() -> Result<AppState, AppError> {
    let db_kind = resolve_test_db_kind()?;
    let state = test_state_builder()?.build().await?;
    if db_kind == DbKind::Postgres {
        if let Some(db) = state.db() {
            invoices::Entity::delete_many().exec(db).await?;
            companies::Entity::delete_many().exec(db).await?;
        }
    }
    Ok(state)
}
