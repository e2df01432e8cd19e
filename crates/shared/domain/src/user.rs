//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::INVALID_EMAIL_MESSAGE;
use crate::error::{DomainError, DomainResult};

/// User domain entity
///
/// `id` and `date_added` are assigned by the storage engine and never
/// change after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub date_added: DateTime<Utc>,
}

/// Writable fields of a user, checked before they reach the store.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct UserInput {
    /// Display name, free-form
    pub name: String,
    /// Email address, must be syntactically valid
    #[validate(email)]
    pub email: String,
}

impl UserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Run the field rules, returning the input unchanged when it passes.
    ///
    /// The email rule is the only one, so every failure reports
    /// [`INVALID_EMAIL_MESSAGE`].
    pub fn validated(self) -> DomainResult<Self> {
        self.validate()
            .map_err(|_| DomainError::validation(INVALID_EMAIL_MESSAGE))?;
        Ok(self)
    }
}
