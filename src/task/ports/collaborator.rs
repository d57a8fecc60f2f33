//! Collaborator port for remote task storage.
//!
//! The remote collaborator is the sole source of truth for tasks; the
//! local collection is only a cache of it. Every network operation the
//! application performs flows through this port.

use std::sync::Arc;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::task::domain::{Task, TaskFields, TaskId, TaskStatus};

/// Result type for collaborator operations.
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;

/// Remote task storage contract.
///
/// Mutation responses carry no payload the application cares about: the
/// caller only observes success or failure and resynchronizes through
/// [`TaskCollaborator::list`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TaskCollaborator: Send + Sync {
    /// Fetches the entire task collection in collaborator order.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::Transport`] when the service cannot be
    /// reached or [`CollaboratorError::Decode`] when the response body is
    /// malformed.
    async fn list(&self) -> CollaboratorResult<Vec<Task>>;

    /// Creates a task from its fields. The collaborator assigns the
    /// identifier; the request carries none.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::Transport`] when the service cannot be
    /// reached.
    async fn create(&self, fields: &TaskFields) -> CollaboratorResult<()>;

    /// Overwrites the whole record identified by `id` with `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::Transport`] when the service cannot be
    /// reached.
    async fn update(&self, id: &TaskId, fields: &TaskFields) -> CollaboratorResult<()>;

    /// Updates only the status of the record identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::Transport`] when the service cannot be
    /// reached.
    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> CollaboratorResult<()>;

    /// Removes the record identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::Transport`] when the service cannot be
    /// reached.
    async fn delete(&self, id: &TaskId) -> CollaboratorResult<()>;
}

/// Errors returned by collaborator implementations.
#[derive(Debug, Clone, Error)]
pub enum CollaboratorError {
    /// The collaborator could not be reached or the request did not
    /// complete.
    #[error("collaborator transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The collaborator answered with a body this application cannot
    /// interpret.
    #[error("malformed collaborator response: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl CollaboratorError {
    /// Wraps a transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a response-decoding failure.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }

    /// Returns whether this is a transport-level failure.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns whether this is a decode failure.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
