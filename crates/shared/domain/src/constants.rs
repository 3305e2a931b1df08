//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Lowest age a stored user may have
pub const MIN_AGE: i64 = 0;

/// Separator between the messages of one field that broke several rules
pub const MESSAGE_SEPARATOR: &str = ", ";

/// Reported when the input record is not a JSON object at all
pub const MSG_BODY_NOT_OBJECT: &str = "Request body must be a JSON object";

pub const MSG_NAME_REQUIRED: &str = "Name is required";
pub const MSG_NAME_NOT_STRING: &str = "Name must be a string";

pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_EMAIL_NOT_STRING: &str = "Email must be a string";
pub const MSG_EMAIL_INVALID: &str = "Invalid email format";

pub const MSG_AGE_REQUIRED: &str = "Age is required";
pub const MSG_AGE_NOT_NUMBER: &str = "Age must be a number";
pub const MSG_AGE_NOT_INTEGER: &str = "Age must be an integer";
pub const MSG_AGE_NEGATIVE: &str = "Age must be a positive number";

// =============================================================================
// Listing
// =============================================================================

/// Largest limit or offset a query window may carry; stores bind them as i64
pub const MAX_WINDOW: u64 = i64::MAX as u64;

// =============================================================================
// Conflicts
// =============================================================================

/// Message surfaced when an email is already held by another user
pub const MSG_EMAIL_EXISTS: &str = "Email already exists";
