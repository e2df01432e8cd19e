//! User Store Library
//!
//! CRUD access to the `users` table with email validation on every write.
//! The admin binary in `main.rs` is a thin shell over [`connect`].

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use common::{AppResult, DatabaseConfig};

use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::UserManager;

/// Open the connection, ensure the schema and assemble the service.
pub async fn connect(config: &DatabaseConfig) -> AppResult<UserManager> {
    let db = Database::connect(config).await?;
    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    Ok(UserManager::new(user_repo))
}

/// Check that the configured database answers.
pub async fn ping(config: &DatabaseConfig) -> AppResult<()> {
    let db = Database::connect_without_schema(config).await?;
    db.ping().await?;
    Ok(())
}
