//! User service - validation in front of the repository.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use common::{AppError, AppResult};
use domain::{User, UserInput};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
///
/// Every method issues fresh queries; nothing is cached between calls.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate the email and insert a new user
    async fn add_user(&self, name: String, email: String) -> AppResult<User>;

    /// Hard delete a user, `NotFound` if the id is unknown
    async fn remove_user(&self, id: i32) -> AppResult<()>;

    /// Snapshot of every user, in storage order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Validate the email and overwrite name/email, `NotFound` if the id is unknown
    async fn update_user(&self, id: i32, name: String, email: String) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

/// Reject the input before any store access when the email is malformed.
fn validate(name: String, email: String) -> AppResult<UserInput> {
    UserInput::new(name, email).validated().map_err(|e| {
        warn!(error = %e, "rejected user input");
        AppError::from(e)
    })
}

#[async_trait]
impl UserService for UserManager {
    async fn add_user(&self, name: String, email: String) -> AppResult<User> {
        let input = validate(name, email)?;
        self.repo.create(input.name, input.email).await
    }

    async fn remove_user(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn update_user(&self, id: i32, name: String, email: String) -> AppResult<User> {
        let input = validate(name, email)?;
        self.repo.update(id, input.name, input.email).await
    }
}
