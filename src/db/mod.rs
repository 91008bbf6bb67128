pub mod models;
pub mod repositories;

use diesel::SqliteConnection;
use diesel::r2d2::{self, ConnectionManager as DbConnectionManager};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::config::Config;
use crate::error::{AppError, AppResult};

pub type DbPool = r2d2::Pool<DbConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn build_pool(config: &Config) -> AppResult<DbPool> {
    let manager = DbConnectionManager::<SqliteConnection>::new(config.db_url());
    r2d2::Pool::builder()
        .max_size(config.database_max_connections)
        .min_idle(Some(config.database_min_connections))
        .connection_timeout(std::time::Duration::from_secs(
            config.database_connection_timeout,
        ))
        .build(manager)
        .map_err(AppError::from)
}

pub fn run_migrations(conn: &mut SqliteConnection) -> AppResult<()> {
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| AppError::internal(format!("Failed to run migrations: {}", e)))?;
    Ok(())
}
