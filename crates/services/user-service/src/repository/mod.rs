//! Repository layer for data access.

pub mod entities;
mod query;
mod user_repository;

pub use query::filter_condition;
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
