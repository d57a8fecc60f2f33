//! In-memory collaborator for board controller tests.
//!
//! Behaves like the remote service: it assigns identifiers on create,
//! returns tasks in insertion order, and treats mutations of unknown
//! identifiers as successful no-ops. Every request received is recorded so
//! tests can assert on exact request shapes.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::task::domain::{Task, TaskFields, TaskId, TaskStatus};
use crate::task::ports::{CollaboratorError, CollaboratorResult, TaskCollaborator};

/// A request received by the in-memory collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedRequest {
    /// The full collection was fetched.
    List,
    /// A create request carrying only the editable fields.
    Create {
        /// Fields the new task was created from.
        fields: TaskFields,
    },
    /// A full-overwrite update request.
    Update {
        /// Identifier of the updated record.
        id: TaskId,
        /// Replacement fields.
        fields: TaskFields,
    },
    /// A status-only partial update request.
    UpdateStatus {
        /// Identifier of the updated record.
        id: TaskId,
        /// The new status.
        status: TaskStatus,
    },
    /// A delete request.
    Delete {
        /// Identifier of the removed record.
        id: TaskId,
    },
}

/// Thread-safe in-memory collaborator.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCollaborator {
    state: Arc<RwLock<CollaboratorState>>,
}

#[derive(Debug, Default)]
struct CollaboratorState {
    tasks: Vec<Task>,
    requests: Vec<RecordedRequest>,
}

impl InMemoryCollaborator {
    /// Creates an empty in-memory collaborator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collaborator seeded with tasks built from the given
    /// fields, assigning a fresh identifier to each.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::Transport`] when the internal lock is
    /// poisoned.
    pub fn seeded(entries: impl IntoIterator<Item = TaskFields>) -> CollaboratorResult<Self> {
        let collaborator = Self::new();
        {
            let mut state = collaborator.write_state()?;
            for fields in entries {
                state.tasks.push(Task::new(TaskId::mint(), fields));
            }
        }
        Ok(collaborator)
    }

    /// Returns every request received so far, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::Transport`] when the internal lock is
    /// poisoned.
    pub fn recorded_requests(&self) -> CollaboratorResult<Vec<RecordedRequest>> {
        Ok(self.read_state()?.requests.clone())
    }

    /// Returns the identifiers of the currently stored tasks, in
    /// collaborator order.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::Transport`] when the internal lock is
    /// poisoned.
    pub fn task_ids(&self) -> CollaboratorResult<Vec<TaskId>> {
        Ok(self
            .read_state()?
            .tasks
            .iter()
            .map(|task| task.id().clone())
            .collect())
    }

    fn read_state(&self) -> CollaboratorResult<std::sync::RwLockReadGuard<'_, CollaboratorState>> {
        self.state
            .read()
            .map_err(|err| CollaboratorError::transport(std::io::Error::other(err.to_string())))
    }

    fn write_state(
        &self,
    ) -> CollaboratorResult<std::sync::RwLockWriteGuard<'_, CollaboratorState>> {
        self.state
            .write()
            .map_err(|err| CollaboratorError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl TaskCollaborator for InMemoryCollaborator {
    async fn list(&self) -> CollaboratorResult<Vec<Task>> {
        let mut state = self.write_state()?;
        state.requests.push(RecordedRequest::List);
        Ok(state.tasks.clone())
    }

    async fn create(&self, fields: &TaskFields) -> CollaboratorResult<()> {
        let mut state = self.write_state()?;
        state.requests.push(RecordedRequest::Create {
            fields: fields.clone(),
        });
        state.tasks.push(Task::new(TaskId::mint(), fields.clone()));
        Ok(())
    }

    async fn update(&self, id: &TaskId, fields: &TaskFields) -> CollaboratorResult<()> {
        let mut state = self.write_state()?;
        state.requests.push(RecordedRequest::Update {
            id: id.clone(),
            fields: fields.clone(),
        });
        if let Some(stored) = state.tasks.iter_mut().find(|task| task.id() == id) {
            *stored = Task::new(id.clone(), fields.clone());
        }
        Ok(())
    }

    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> CollaboratorResult<()> {
        let mut state = self.write_state()?;
        state.requests.push(RecordedRequest::UpdateStatus {
            id: id.clone(),
            status,
        });
        if let Some(stored) = state.tasks.iter_mut().find(|task| task.id() == id) {
            let fields = stored.fields().clone().with_status(status);
            *stored = Task::new(id.clone(), fields);
        }
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> CollaboratorResult<()> {
        let mut state = self.write_state()?;
        state.requests.push(RecordedRequest::Delete { id: id.clone() });
        state.tasks.retain(|task| task.id() != id);
        Ok(())
    }
}
