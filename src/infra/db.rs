//! Database connection management.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};

use crate::config::{Config, MAX_DB_CONNECTIONS};

/// Database session wrapper.
///
/// Holds a single-connection pool: one session per run, released by
/// [`Database::close`] or on drop.
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the session described by `config`.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url().to_owned());
        options
            .max_connections(MAX_DB_CONNECTIONS)
            .min_connections(0)
            .sqlx_logging(config.log_queries);

        let connection = SeaDatabase::connect(options).await?;
        tracing::debug!(backend = ?connection.get_database_backend(), "Database session opened");

        Ok(Self { connection })
    }

    /// Get a handle to the session's connection pool.
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }

    /// Release the session.
    pub async fn close(self) -> Result<(), DbErr> {
        self.connection.close().await?;
        tracing::debug!("Database session closed");
        Ok(())
    }
}
