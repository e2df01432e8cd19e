//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tracing::debug;

use super::entities::user::{ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult, OptionExt};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Each method maps to a single statement against the `users` table,
/// except `update`, which reads the row before writing it.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Insert a new user, letting the store assign id and timestamp
    async fn create(&self, name: String, email: String) -> AppResult<User>;

    /// Overwrite name and email of an existing user
    async fn update(&self, id: i32, name: String, email: String) -> AppResult<User>;

    /// Permanently delete user from database
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// List all users in storage order
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository over a single connection
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, name: String, email: String) -> AppResult<User> {
        let active_model = ActiveModel {
            name: Set(name),
            email: Set(email),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        debug!(user_id = model.id, "user inserted");
        Ok(User::from(model))
    }

    async fn update(&self, id: i32, name: String, email: String) -> AppResult<User> {
        let user = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found()?;

        // id and date_added stay Unchanged, so only name/email are written
        let mut active: ActiveModel = user.into();
        active.name = Set(name);
        active.email = Set(email);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        debug!(user_id = model.id, "user updated");
        Ok(User::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        debug!(user_id = id, "user deleted");
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
