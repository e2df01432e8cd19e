//! User store configuration.

use std::env;

use common::{
    DatabaseConfig, DEFAULT_DB_CHARSET, DEFAULT_DB_DRIVER, DEFAULT_DB_HOST, DEFAULT_DB_NAME,
    DEFAULT_DB_USER,
};

/// User store configuration.
#[derive(Debug, Clone, Default)]
pub struct UserStoreConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl UserStoreConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            database: DatabaseConfig {
                url: lookup("USER_STORE_DATABASE_URL").or_else(|| lookup("DATABASE_URL")),
                driver: var("DB_DRIVER", DEFAULT_DB_DRIVER),
                host: var("DB_HOST", DEFAULT_DB_HOST),
                database: var("DB_NAME", DEFAULT_DB_NAME),
                charset: var("DB_CHARSET", DEFAULT_DB_CHARSET),
                username: var("DB_USER", DEFAULT_DB_USER),
                password: var("DB_PASSWORD", ""),
            },
        }
    }
}
