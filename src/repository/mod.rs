//! Repository layer for database operations

pub mod borrowers;
pub mod items;
pub mod loans;

use std::{str::FromStr, time::Duration};

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};

use crate::{config::DatabaseConfig, error::AppResult};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub items: items::ItemsRepository,
    pub borrowers: borrowers::BorrowersRepository,
    pub loans: loans::LoansRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            items: items::ItemsRepository::new(pool.clone()),
            borrowers: borrowers::BorrowersRepository::new(pool.clone()),
            loans: loans::LoansRepository::new(pool.clone()),
            pool,
        }
    }

    /// Open the connection pool described by `config`.
    ///
    /// Foreign keys are switched on for every connection. An in-memory
    /// database is bound to one connection that is never recycled, otherwise
    /// each pooled connection would see its own empty database.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if config.is_in_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        tracing::debug!("Opened database pool for {}", config.url);

        Ok(Self::new(pool))
    }

    /// Apply pending schema migrations. Safe to call more than once.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Round-trip to the database (readiness probe)
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection, waiting for in-flight queries
    pub async fn close(&self) {
        self.pool.close().await;
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::memory_repository;

    #[tokio::test]
    async fn migrate_is_idempotent() {
        let repository = memory_repository().await;
        repository.migrate().await.unwrap();
        repository.ping().await.unwrap();
        assert_eq!(repository.items.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn closed_store_reports_database_error() {
        let repository = memory_repository().await;
        repository.close().await;
        assert!(matches!(
            repository.ping().await,
            Err(crate::error::AppError::Database(_))
        ));
    }
}
