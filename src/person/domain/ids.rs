//! Identifier types for the person domain.

use super::PersonDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Maximum length for a person identifier.
const MAX_PERSON_ID_LENGTH: usize = 100;

/// Validated opaque person identifier.
///
/// Person identifiers are supplied by callers (assignment requests) or
/// generated at registration time. They are accepted as-is by the task
/// module without a foreign-key check against the person repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Creates a validated person identifier.
    ///
    /// The input is trimmed. Only ASCII alphanumeric characters and hyphens
    /// are accepted, up to 100 characters.
    ///
    /// # Errors
    ///
    /// Returns [`PersonDomainError::EmptyPersonId`] when the value is empty
    /// after trimming, [`PersonDomainError::PersonIdTooLong`] when it exceeds
    /// 100 characters, or [`PersonDomainError::InvalidPersonId`] when it
    /// contains other characters.
    pub fn new(value: impl Into<String>) -> Result<Self, PersonDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(PersonDomainError::EmptyPersonId);
        }

        if trimmed.len() > MAX_PERSON_ID_LENGTH {
            return Err(PersonDomainError::PersonIdTooLong(raw));
        }

        let is_valid = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');

        if !is_valid {
            return Err(PersonDomainError::InvalidPersonId(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Generates a fresh random person identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PersonId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
