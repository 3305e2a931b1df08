//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-generated identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Alice"))]
    pub name: String,
    /// Email address, unique across all users
    #[cfg_attr(feature = "openapi", schema(example = "alice@example.com"))]
    pub email: String,
    /// Age in years
    #[cfg_attr(feature = "openapi", schema(example = 30, minimum = 0))]
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check whether a patch would change this user's email
    pub fn email_changes_to<'a>(&self, patch: &'a UpdateUser) -> Option<&'a str> {
        patch
            .email
            .as_deref()
            .filter(|email| *email != self.email)
    }
}

/// Validated candidate for a new user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUser {
    /// User display name
    #[cfg_attr(feature = "openapi", schema(example = "Alice"))]
    pub name: String,
    /// User email address
    #[cfg_attr(feature = "openapi", schema(example = "alice@example.com"))]
    pub email: String,
    /// User age
    #[cfg_attr(feature = "openapi", schema(example = 30, minimum = 0))]
    pub age: i32,
}

/// Validated patch for an existing user; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateUser {
    /// New display name
    #[cfg_attr(feature = "openapi", schema(example = "Alice Cooper"))]
    pub name: Option<String>,
    /// New email address
    #[cfg_attr(feature = "openapi", schema(example = "alice.cooper@example.com"))]
    pub email: Option<String>,
    /// New age
    #[cfg_attr(feature = "openapi", schema(example = 31, minimum = 0))]
    pub age: Option<i32>,
}
