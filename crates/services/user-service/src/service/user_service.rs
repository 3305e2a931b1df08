//! User service - Handles user-related business logic.
//!
//! Every entry point that takes a raw record runs it through the validator
//! first, so callers other than the HTTP layer get the same guarantees.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::{validate_create, validate_update, User, UserFilter, UserPage};

use crate::repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
///
/// Absence is not an error here: lookups return `None` and deletes return
/// `false`. The transport decides what a missing user means.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and store a new user
    async fn create_user(&self, input: &Value) -> AppResult<User>;

    /// One page of matching users plus the unwindowed total
    async fn get_users(&self, filter: &UserFilter) -> AppResult<UserPage>;

    /// Get user by ID
    async fn get_user_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Validate and apply a partial update
    async fn update_user(&self, id: i32, input: &Value) -> AppResult<Option<User>>;

    /// Delete user; false when there was nothing to delete
    async fn delete_user(&self, id: i32) -> AppResult<bool>;
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

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: &Value) -> AppResult<User> {
        let candidate = validate_create(input)?;

        if self.repo.find_by_email(&candidate.email).await?.is_some() {
            tracing::debug!(email = %candidate.email, "Create rejected, email taken");
            return Err(AppError::duplicate_email(candidate.email));
        }

        self.repo.create(candidate).await
    }

    async fn get_users(&self, filter: &UserFilter) -> AppResult<UserPage> {
        let (users, total) =
            futures::try_join!(self.repo.find_all(filter), self.repo.count(filter))?;

        Ok(UserPage { users, total })
    }

    async fn get_user_by_id(&self, id: i32) -> AppResult<Option<User>> {
        self.repo.find_by_id(id).await
    }

    async fn update_user(&self, id: i32, input: &Value) -> AppResult<Option<User>> {
        let patch = validate_update(input)?;

        let Some(current) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(email) = current.email_changes_to(&patch) {
            let holder = self.repo.find_by_email(email).await?;
            if holder.is_some_and(|other| other.id != id) {
                tracing::debug!(user_id = %id, email = %email, "Update rejected, email taken");
                return Err(AppError::duplicate_email(email));
            }
        }

        self.repo.update(id, patch).await
    }

    async fn delete_user(&self, id: i32) -> AppResult<bool> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        self.repo.delete(id).await
    }
}
