//! Database module providing connection management, migrations, and the
//! per-table write operations used by the ingestion pipeline.
//!
//! Write operations are generic over [`ConnectionTrait`] and are always handed
//! the transaction opened by the caller; none of them commits or rolls back.

pub mod answers;
pub mod checklists;
pub mod deliverables;
pub mod evaluations;
pub mod processing_logs;
pub mod questions;
pub mod validation;

use std::time::Duration;

use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait,
};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::migration::Migrator;

/// Result of an idempotent insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    AlreadyPresent,
}

/// Database connection pool wrapper.
#[derive(Clone, Debug)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Connect using the database settings from configuration.
    pub async fn new(config: &Config) -> AppResult<Self> {
        let settings = &config.database;
        info!(
            host = %settings.host,
            user = %settings.user,
            database = %settings.name,
            port = settings.port,
            "Connecting to database"
        );

        let mut options = ConnectOptions::new(settings.url());
        options
            .max_connections(settings.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to database: {}", e)))?;

        Ok(Self { conn })
    }

    /// Wrap an existing connection (used by tests and tooling).
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get access to the connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Start a transaction on a dedicated connection.
    ///
    /// Dropping the returned transaction without committing rolls it back and
    /// returns the connection to the pool.
    pub async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        self.conn.begin().await
    }

    /// Apply pending schema migrations.
    pub async fn run_migrations(&self) -> AppResult<()> {
        Migrator::up(&self.conn, None)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {}", e)))
    }
}

/// Fresh in-memory SQLite pool with the schema applied.
#[cfg(test)]
pub(crate) async fn memory_pool() -> DbPool {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let conn = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    let pool = DbPool::from_connection(conn);
    pool.run_migrations()
        .await
        .expect("Failed to run migrations");
    pool
}
