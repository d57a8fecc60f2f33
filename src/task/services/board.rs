//! Board controller owning the task cache and the edit selection.
//!
//! The controller is the exclusive owner of the locally held task
//! collection. Rendering layers receive the collection by reference and
//! hand user intent back as [`TaskCommand`] values; every network call
//! flows through the controller. Failures are logged and reported in the
//! returned [`OperationOutcome`]; nothing retries and no failure is
//! surfaced as an error value to rendering code.

use std::sync::Arc;

use tracing::warn;

use crate::task::domain::{Task, TaskFields, TaskId};
use crate::task::ports::{CollaboratorError, TaskCollaborator};

/// A user intent produced by a rendering layer and consumed by the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    /// Create a task from the given fields. The collaborator assigns the
    /// identifier.
    Create(TaskFields),
    /// Overwrite the whole record with the given fields.
    Update(TaskId, TaskFields),
    /// Advance the task one step along the status chain.
    AdvanceStatus(TaskId),
    /// Remove the task.
    Delete(TaskId),
}

/// Observable result of a board operation.
///
/// The product behavior is to absorb failures (no retry, no error
/// surfaced to the rendering layer); the outcome makes that absorbed
/// failure visible to callers and tests.
#[derive(Debug, Clone)]
#[must_use]
pub enum OperationOutcome {
    /// The operation and any follow-up refresh completed.
    Completed,
    /// The operation was not performed: the task is unknown to the local
    /// collection or its status is already terminal.
    Skipped,
    /// A collaborator call failed; local state follows the documented
    /// policy for the operation.
    Failed(CollaboratorError),
}

impl OperationOutcome {
    /// Returns whether the operation completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns whether the operation was skipped without a network call.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    /// Returns the absorbed failure, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&CollaboratorError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Completed | Self::Skipped => None,
        }
    }
}

/// Application controller for the task collection.
///
/// Owns the authoritative local copy of the collaborator's tasks and the
/// "task currently being edited" selection. The collection is replaced
/// wholesale after every load, create, or status update, and pruned
/// locally after a confirmed delete.
#[derive(Debug, Clone)]
pub struct TaskBoard<C>
where
    C: TaskCollaborator,
{
    collaborator: Arc<C>,
    tasks: Vec<Task>,
    editing: Option<TaskId>,
}

impl<C> TaskBoard<C>
where
    C: TaskCollaborator,
{
    /// Creates a board with an empty collection.
    #[must_use]
    pub const fn new(collaborator: Arc<C>) -> Self {
        Self {
            collaborator,
            tasks: Vec::new(),
            editing: None,
        }
    }

    /// Returns the cached tasks in collaborator order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task currently selected for editing, if it is still
    /// present in the collection.
    #[must_use]
    pub fn editing_task(&self) -> Option<&Task> {
        let id = self.editing.as_ref()?;
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Selects a task for editing.
    pub fn begin_editing(&mut self, id: TaskId) {
        self.editing = Some(id);
    }

    /// Clears the edit selection.
    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }

    /// Fetches the full collection and replaces the local one wholesale.
    ///
    /// On failure the previous collection stays visible.
    pub async fn load_tasks(&mut self) -> OperationOutcome {
        match self.collaborator.list().await {
            Ok(tasks) => {
                self.tasks = tasks;
                OperationOutcome::Completed
            }
            Err(err) => {
                warn!(error = %err, "failed to load tasks; keeping previously fetched collection");
                OperationOutcome::Failed(err)
            }
        }
    }

    /// Executes a rendering-layer command.
    pub async fn submit(&mut self, command: TaskCommand) -> OperationOutcome {
        match command {
            TaskCommand::Create(fields) => self.create_task(&fields).await,
            TaskCommand::Update(id, fields) => self.update_task(&id, &fields).await,
            TaskCommand::AdvanceStatus(id) => self.advance_status(&id).await,
            TaskCommand::Delete(id) => self.delete_task(&id).await,
        }
    }

    /// Advances a task one step along `pending → in_progress → done`.
    ///
    /// Sends a status-only partial update, then resynchronizes whether or
    /// not the update succeeded. A task unknown to the collection or
    /// already finished yields [`OperationOutcome::Skipped`] with no
    /// network call.
    pub async fn advance_status(&mut self, id: &TaskId) -> OperationOutcome {
        let Some(current) = self
            .tasks
            .iter()
            .find(|task| task.id() == id)
            .map(Task::status)
        else {
            warn!(%id, "status advance requested for a task not in the local collection");
            return OperationOutcome::Skipped;
        };
        let Some(next) = current.successor() else {
            warn!(%id, status = %current, "status advance requested for a finished task");
            return OperationOutcome::Skipped;
        };

        let mutation = self.collaborator.update_status(id, next).await;
        if let Err(err) = &mutation {
            warn!(%id, error = %err, "status update failed");
        }
        // Resynchronize regardless of the mutation outcome.
        let refresh = self.load_tasks().await;
        match mutation {
            Ok(()) => refresh,
            Err(err) => OperationOutcome::Failed(err),
        }
    }

    /// Deletes a task and prunes it from the local collection without a
    /// re-fetch.
    ///
    /// The prune runs only after the collaborator call returns success; a
    /// transport failure leaves the collection untouched.
    pub async fn delete_task(&mut self, id: &TaskId) -> OperationOutcome {
        match self.collaborator.delete(id).await {
            Ok(()) => {
                self.tasks.retain(|task| task.id() != id);
                OperationOutcome::Completed
            }
            Err(err) => {
                warn!(%id, error = %err, "delete failed; local collection left unchanged");
                OperationOutcome::Failed(err)
            }
        }
    }

    async fn create_task(&mut self, fields: &TaskFields) -> OperationOutcome {
        match self.collaborator.create(fields).await {
            Ok(()) => self.handle_form_completion().await,
            Err(err) => {
                warn!(error = %err, "task creation failed");
                OperationOutcome::Failed(err)
            }
        }
    }

    async fn update_task(&mut self, id: &TaskId, fields: &TaskFields) -> OperationOutcome {
        match self.collaborator.update(id, fields).await {
            Ok(()) => self.handle_form_completion().await,
            Err(err) => {
                warn!(%id, error = %err, "task update failed");
                OperationOutcome::Failed(err)
            }
        }
    }

    /// Clears the edit selection and refreshes the collection after a
    /// successful create or update.
    async fn handle_form_completion(&mut self) -> OperationOutcome {
        self.editing = None;
        self.load_tasks().await
    }
}
