//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

use crate::constants::MSG_EMAIL_EXISTS;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input broke one or more field rules; one message per offending field
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Another user already holds this email
    #[error("{}", MSG_EMAIL_EXISTS)]
    DuplicateEmail(String),
}

impl DomainError {
    /// Create a validation error from a list of messages
    pub fn validation(messages: Vec<String>) -> Self {
        DomainError::Validation(messages)
    }

    /// Create a duplicate email error
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        DomainError::DuplicateEmail(email.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
