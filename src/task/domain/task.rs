//! Task aggregate and its validated editable fields.

use serde::{Deserialize, Serialize};

use super::{TaskError, TaskId, TaskStatus};

/// Editable task fields, validated at construction.
///
/// A task that has not been persisted yet exists only as `TaskFields`;
/// the identifier is added once the collaborator has assigned one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    title: String,
    description: String,
    status: TaskStatus,
}

impl TaskFields {
    /// Creates validated task fields. Title and description are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyTitle`] or [`TaskError::EmptyDescription`]
    /// when the respective text is empty after trimming.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
    ) -> Result<Self, TaskError> {
        let title = normalize(title.into()).ok_or(TaskError::EmptyTitle)?;
        let description = normalize(description.into()).ok_or(TaskError::EmptyDescription)?;
        Ok(Self {
            title,
            description,
            status,
        })
    }

    /// Returns the same fields with the status replaced.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}

/// A persisted task as reported by the remote collaborator.
///
/// Every `Task` carries an identifier by construction; the nullable
/// identifier of the wire format has no counterpart here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    #[serde(flatten)]
    fields: TaskFields,
}

impl Task {
    /// Assembles a task from a collaborator-assigned identifier and fields.
    #[must_use]
    pub const fn new(id: TaskId, fields: TaskFields) -> Self {
        Self { id, fields }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the editable fields.
    #[must_use]
    pub const fn fields(&self) -> &TaskFields {
        &self.fields
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.fields.title()
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.fields.description()
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.fields.status()
    }
}

/// Trims the value, returning `None` when nothing remains.
fn normalize(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}
