//! Task aggregate root and related lifecycle types.

use super::{TaskDescription, TaskId, TaskPatch, TaskTitle};
use crate::person::domain::PersonId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task workflow status.
///
/// Statuses carry no transition constraints: any status may follow any
/// other, including moving a finished task back to `Todo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Done,
    /// Work cannot proceed.
    Blocked,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
            Self::Blocked => "BLOCKED",
        }
    }
}

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Lowest urgency.
    Low,
    /// Default urgency.
    Medium,
    /// Elevated urgency.
    High,
    /// Highest urgency.
    Urgent,
}

impl Priority {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
        }
    }
}

/// Task aggregate root.
///
/// The assignment list is semantically a set: insertion order is kept for
/// deterministic listing, but duplicates are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: TaskDescription,
    status: TaskStatus,
    priority: Priority,
    assigned_people: Vec<PersonId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<DateTime<Utc>>,
}

/// Parameter object carrying the validated fields of a task to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Validated title.
    pub title: TaskTitle,
    /// Validated description.
    pub description: TaskDescription,
    /// Initial workflow status.
    pub status: TaskStatus,
    /// Initial priority.
    pub priority: Priority,
    /// Optional due date; `None` means no due date.
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new task with a generated identifier and an empty
    /// assignment set.
    ///
    /// Both timestamps are stamped from the clock, so a freshly created
    /// task always satisfies `created_at == updated_at`.
    #[must_use]
    pub fn new(draft: TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();

        Self {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            assigned_people: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
            due_date: draft.due_date,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the assigned people in assignment order.
    #[must_use]
    pub fn assigned_people(&self) -> &[PersonId] {
        &self.assigned_people
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Applies a field-level partial update and stamps `updated_at` from
    /// the patch.
    ///
    /// Fields absent from the patch keep their current value; the due date
    /// follows the patch's tri-state member. The timestamp refreshes even
    /// when no field changes value.
    pub fn apply_patch(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        self.due_date = patch.due_date.apply(self.due_date);
        self.touch_at(patch.updated_at);
    }

    /// Adds a person to the assignment set, reporting whether the set grew.
    ///
    /// Assigning an already-assigned person leaves the set unchanged but
    /// still refreshes `updated_at`.
    pub fn assign_person(&mut self, person_id: PersonId, at: DateTime<Utc>) -> bool {
        let added = if self.assigned_people.contains(&person_id) {
            false
        } else {
            self.assigned_people.push(person_id);
            true
        };
        self.touch_at(at);
        added
    }

    /// Removes a person from the assignment set, reporting whether the set
    /// shrank.
    ///
    /// Removing a person who was never assigned leaves the set unchanged
    /// but still refreshes `updated_at`.
    pub fn unassign_person(&mut self, person_id: &PersonId, at: DateTime<Utc>) -> bool {
        let before = self.assigned_people.len();
        self.assigned_people.retain(|assigned| assigned != person_id);
        let removed = self.assigned_people.len() < before;
        self.touch_at(at);
        removed
    }

    /// Stamps `updated_at` with the given instant.
    fn touch_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}
