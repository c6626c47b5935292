use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind, RuntimeEnv};
use crate::error::AppError;

fn db_engine(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteMemory => "sqlite",
    }
}

fn connect_options(url: String, kind: DbKind) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url);
    opts.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(true);

    match kind {
        DbKind::Postgres => {
            // Pool opens physical connections on first use
            opts.connect_lazy(true).max_connections(10).min_connections(0);
        }
        DbKind::SqliteMemory => {
            // Every pooled connection to :memory: is its own database
            opts.max_connections(1).min_connections(1);
        }
    }
    opts
}

/// Open the shared pool. Does NOT run migrations.
pub async fn connect_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(env, kind)?;
    let conn = Database::connect(connect_options(url, kind)).await?;
    info!(
        db_engine = db_engine(kind),
        env = ?env,
        "db_connect=ok"
    );
    Ok(conn)
}

/// Connect and bring the schema up to date
pub async fn bootstrap_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(env, kind).await?;
    migration::migrate_up(&conn).await?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, DbBackend};

    use super::*;

    #[tokio::test]
    async fn sqlite_memory_bootstrap_creates_schema() {
        let conn = bootstrap_db(RuntimeEnv::Test, DbKind::SqliteMemory)
            .await
            .expect("bootstrap sqlite memory");
        assert_eq!(conn.get_database_backend(), DbBackend::Sqlite);

        let applied = migration::count_applied_migrations(&conn)
            .await
            .expect("count migrations");
        assert_eq!(applied, 1);
    }
}
