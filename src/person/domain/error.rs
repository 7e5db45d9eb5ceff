//! Error types for person domain validation.

use thiserror::Error;

/// Errors returned while constructing domain person values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersonDomainError {
    /// The person identifier is empty after trimming.
    #[error("person ID must not be empty")]
    EmptyPersonId,

    /// The person identifier exceeds the maximum length.
    #[error("person ID '{0}' exceeds 100 characters")]
    PersonIdTooLong(String),

    /// The person identifier contains characters outside `[A-Za-z0-9-]`.
    #[error("person ID '{0}' must contain only alphanumeric characters and hyphens")]
    InvalidPersonId(String),

    /// The person name is empty after trimming.
    #[error("person name must not be empty")]
    EmptyPersonName,

    /// The email address is not a plausible `local@domain` value.
    #[error("invalid email address: {0}")]
    InvalidEmailAddress(String),
}
