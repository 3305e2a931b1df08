//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::query::filter_condition;
use common::{AppError, AppResult};
use domain::{CreateUser, UpdateUser, User, UserFilter, MAX_WINDOW};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Absence is reported as `None`/`false`; only store failures and email
/// collisions are errors.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; the store assigns the id
    async fn create(&self, candidate: CreateUser) -> AppResult<User>;

    /// Users matching the filter, newest first, windowed by offset and limit
    async fn find_all(&self, filter: &UserFilter) -> AppResult<Vec<User>>;

    /// Number of users matching the filter, ignoring the window
    async fn count(&self, filter: &UserFilter) -> AppResult<u64>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by exact email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Merge a patch into an existing user
    async fn update(&self, id: i32, patch: UpdateUser) -> AppResult<Option<User>>;

    /// Remove a user; true iff a row was deleted
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// sea-orm backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// The unique index on `email` is the final word on duplicates.
fn write_error(err: DbErr, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            tracing::warn!(email = %email, "Unique index rejected duplicate email");
            AppError::duplicate_email(email)
        }
        _ => AppError::from(err),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, candidate: CreateUser) -> AppResult<User> {
        let now = chrono::Utc::now();
        let email = candidate.email.clone();
        let active_model = ActiveModel {
            name: Set(candidate.name),
            email: Set(candidate.email),
            age: Set(candidate.age),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, &email))?;

        tracing::info!(user_id = %model.id, "User created");
        Ok(User::from(model))
    }

    async fn find_all(&self, filter: &UserFilter) -> AppResult<Vec<User>> {
        let backend = self.db.get_database_backend();
        let mut query = UserEntity::find()
            .filter(filter_condition(filter, backend))
            .order_by_desc(user::Column::CreatedAt)
            .order_by_desc(user::Column::Id);

        let offset = filter.effective_offset();
        if offset > 0 {
            query = query.offset(offset);
        }
        match filter.effective_limit() {
            Some(limit) => query = query.limit(limit),
            // SQLite rejects OFFSET without LIMIT
            None if offset > 0 => query = query.limit(MAX_WINDOW),
            None => {}
        }

        let models = query.all(&self.db).await.map_err(AppError::from)?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn count(&self, filter: &UserFilter) -> AppResult<u64> {
        let backend = self.db.get_database_backend();
        UserEntity::find()
            .filter(filter_condition(filter, backend))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn update(&self, id: i32, patch: UpdateUser) -> AppResult<Option<User>> {
        let Some(current) = UserEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        // Clock skew must not move updated_at backwards.
        let updated_at = chrono::Utc::now().max(current.updated_at);
        let email = patch.email.clone().unwrap_or_else(|| current.email.clone());
        let mut active: ActiveModel = current.into();

        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(new_email) = patch.email {
            active.email = Set(new_email);
        }
        if let Some(age) = patch.age {
            active.age = Set(age);
        }
        active.updated_at = Set(updated_at);

        let model = match active.update(&self.db).await {
            Ok(model) => model,
            // Deleted between the read above and this write
            Err(DbErr::RecordNotUpdated) => {
                tracing::debug!(user_id = %id, "User removed before update");
                return Ok(None);
            }
            Err(e) => return Err(write_error(e, &email)),
        };

        tracing::info!(user_id = %model.id, "User updated");
        Ok(Some(User::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        let removed = result.rows_affected > 0;
        if removed {
            tracing::info!(user_id = %id, "User deleted");
        }
        Ok(removed)
    }
}
