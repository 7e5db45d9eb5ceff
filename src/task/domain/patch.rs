//! Partial-update types for stored tasks.

use super::{Priority, TaskDescription, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};

/// Tri-state update for the optional due date.
///
/// A plain optional cannot distinguish "leave the due date alone" from
/// "clear it", so the patch carries all three cases explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DueDatePatch {
    /// Leave the existing due date untouched.
    #[default]
    Keep,
    /// Clear the due date.
    Clear,
    /// Set the due date to the given instant.
    Set(DateTime<Utc>),
}

impl DueDatePatch {
    /// Resolves the patch against the current due date.
    #[must_use]
    pub const fn apply(self, current: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
        match self {
            Self::Keep => current,
            Self::Clear => None,
            Self::Set(at) => Some(at),
        }
    }
}

/// Field-level partial update applied to a stored task.
///
/// Fields left as `None` survive from the existing record. The `updated_at`
/// stamp is mandatory: every merge refreshes the mutation timestamp, even
/// when no other field is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title, when present.
    pub title: Option<TaskTitle>,
    /// Replacement description, when present.
    pub description: Option<TaskDescription>,
    /// Replacement status, when present.
    pub status: Option<TaskStatus>,
    /// Replacement priority, when present.
    pub priority: Option<Priority>,
    /// Tri-state due-date update.
    pub due_date: DueDatePatch,
    /// Mutation timestamp stamped onto the record.
    pub updated_at: DateTime<Utc>,
}

impl TaskPatch {
    /// Creates a patch that only refreshes the mutation timestamp.
    #[must_use]
    pub const fn empty(updated_at: DateTime<Utc>) -> Self {
        Self {
            title: None,
            description: None,
            status: None,
            priority: None,
            due_date: DueDatePatch::Keep,
            updated_at,
        }
    }
}
