//! Task form: editable fields for a single task.
//!
//! The form holds three editable fields seeded from an existing task
//! (edit mode) or defaults (create mode: empty text, `pending` status).
//! Submission validates all fields through the domain constructors and
//! produces the create-or-update command; the form itself never touches
//! the network and never refreshes the shared collection.

use crate::task::domain::{Task, TaskError, TaskFields, TaskId, TaskStatus};
use crate::task::services::TaskCommand;

/// Editable form state for creating or editing one task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    task_id: Option<TaskId>,
    title: String,
    description: String,
    status: TaskStatus,
}

impl TaskForm {
    /// Creates an empty form in create mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form in edit mode, seeded from an existing task.
    #[must_use]
    pub fn for_task(task: &Task) -> Self {
        Self {
            task_id: Some(task.id().clone()),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            status: task.status(),
        }
    }

    /// Returns whether the form edits an existing task.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.task_id.is_some()
    }

    /// Returns the current title binding.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the current description binding.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current status binding.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Replaces the title binding.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the description binding.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the status binding.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Validates the bindings and produces the submission command.
    ///
    /// A form seeded from an existing task produces
    /// [`TaskCommand::Update`] carrying the identifier plus all three
    /// current field values; otherwise [`TaskCommand::Create`] carrying
    /// the fields only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError`] when a field is empty after trimming; no
    /// command is produced.
    pub fn submit(&self) -> Result<TaskCommand, TaskError> {
        let fields = TaskFields::new(self.title.clone(), self.description.clone(), self.status)?;
        let command = match &self.task_id {
            Some(id) => TaskCommand::Update(id.clone(), fields),
            None => TaskCommand::Create(fields),
        };
        Ok(command)
    }

    /// Resets the form to create mode with default bindings.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
