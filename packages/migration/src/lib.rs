pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseConnection;

mod m20240601_000001_companies_invoices; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240601_000001_companies_invoices::Migration)]
    }
}

/// Apply every pending migration and log the before/after counts.
pub async fn migrate_up(db: &DatabaseConnection) -> Result<(), DbErr> {
    let defined = Migrator::migrations().len();
    let before = count_applied_migrations(db).await.unwrap_or(0);
    tracing::info!(defined, applied = before, "migrate=start");

    match Migrator::up(db, None).await {
        Ok(()) => {
            let after = count_applied_migrations(db).await.unwrap_or(0);
            tracing::info!(defined, applied = after, "migrate=done");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "migrate=failed");
            Err(e)
        }
    }
}

/// Count the number of migrations that have been applied to the database.
/// Returns 0 if the migration table doesn't exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0), // Migration table doesn't exist yet
        Err(e) => Err(e),
    }
}

/// Get the version string of the latest applied migration.
/// Returns None if no migrations have been applied or the migration table doesn't exist.
pub async fn get_latest_migration_version(
    db: &DatabaseConnection,
) -> Result<Option<String>, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.last().map(|m| m.name().to_string())),
        Err(DbErr::Exec(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
