//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the `User` record, the validation rule table that turns raw input into
//! typed candidates, and the filter/pagination types used by list queries.

pub mod constants;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use filter::UserFilter;
pub use pagination::{PaginationMeta, UserListResponse, UserPage};
pub use user::{CreateUser, UpdateUser, User};
pub use validation::{validate, validate_create, validate_update, Intent};
