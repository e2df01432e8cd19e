//! Database connection and initialization.

use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};

use common::DatabaseConfig;

use super::schema::users_table;

/// Idle and lifetime limit for the held connection.
///
/// Left unset, the pool recycles it after 10 minutes idle or 30 minutes of
/// age, which silently swaps in a fresh `sqlite::memory:` database.
pub const HELD_CONNECTION_TIMEOUT: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 100);

/// Pool options for a single connection that is never recycled.
pub fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.connection_url());
    options
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(HELD_CONNECTION_TIMEOUT)
        .max_lifetime(HELD_CONNECTION_TIMEOUT)
        .sqlx_logging(false);
    options
}

/// Database wrapper for connection management
///
/// Holds exactly one connection for its whole lifetime.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the connection and make sure the `users` table exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = Self::connect_without_schema(config).await?;

        db.ensure_schema().await?;
        tracing::info!(
            backend = ?db.connection.get_database_backend(),
            "Database connected and schema ready"
        );

        Ok(db)
    }

    /// Connect without touching the schema.
    pub async fn connect_without_schema(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(connect_options(config)).await?;
        Ok(Self { connection })
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Create the `users` table if it is missing.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        self.connection.execute(backend.build(&users_table())).await?;
        Ok(())
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_options_hold_one_connection() {
        let options = connect_options(&DatabaseConfig::from_url("sqlite::memory:"));

        assert_eq!(options.get_url(), "sqlite::memory:");
        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_min_connections(), Some(1));
    }

    #[test]
    fn test_connect_options_never_recycle() {
        let options = connect_options(&DatabaseConfig::default());

        // idle_timeout and max_lifetime both carry the held timeout
        let rendered = format!("{:?}", options);
        let timeout = format!("{:?}", HELD_CONNECTION_TIMEOUT);
        assert_eq!(rendered.matches(&timeout).count(), 2, "{rendered}");
        assert!(HELD_CONNECTION_TIMEOUT > Duration::from_secs(30 * 60));
    }
}
