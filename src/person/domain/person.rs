//! Person aggregate and related value types.

use super::{PersonDomainError, PersonId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a person holds in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonRole {
    /// Administrative access.
    Admin,
    /// Regular user access.
    User,
}

impl PersonRole {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }
}

/// Validated display name for a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Creates a validated person name.
    ///
    /// # Errors
    ///
    /// Returns [`PersonDomainError::EmptyPersonName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, PersonDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(PersonDomainError::EmptyPersonName);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// The input is trimmed and must contain exactly one `@` with non-empty
    /// local and domain parts and no whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`PersonDomainError::InvalidEmailAddress`] when the value does
    /// not fit that shape.
    pub fn new(value: impl Into<String>) -> Result<Self, PersonDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        let is_valid = trimmed.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !trimmed.chars().any(char::is_whitespace)
        });

        if !is_valid {
            return Err(PersonDomainError::InvalidEmailAddress(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Person aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    id: PersonId,
    name: PersonName,
    email: EmailAddress,
    role: PersonRole,
    created_at: DateTime<Utc>,
}

impl Person {
    /// Creates a new person with a generated identifier.
    #[must_use]
    pub fn new(name: PersonName, email: EmailAddress, role: PersonRole, clock: &impl Clock) -> Self {
        Self {
            id: PersonId::generate(),
            name,
            email,
            role,
            created_at: clock.utc(),
        }
    }

    /// Returns the person identifier.
    #[must_use]
    pub const fn id(&self) -> &PersonId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &PersonName {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> PersonRole {
        self.role
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies a field-level partial update.
    ///
    /// Fields absent from the patch keep their current value.
    pub fn apply_patch(&mut self, patch: &PersonPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
    }
}

/// Field-level partial update for a stored person.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonPatch {
    /// Replacement display name, when present.
    pub name: Option<PersonName>,
    /// Replacement email address, when present.
    pub email: Option<EmailAddress>,
    /// Replacement role, when present.
    pub role: Option<PersonRole>,
}
