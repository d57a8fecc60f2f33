//! Identifier types for the task domain.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TaskError;

/// Opaque task identifier assigned by the remote collaborator.
///
/// The collaborator is the only party that assigns identifiers; this crate
/// never invents one for a task it intends to persist remotely. The value
/// is treated as an opaque non-blank string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::BlankTaskId`] when the value is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskError::BlankTaskId);
        }
        Ok(Self(raw))
    }

    /// Mints a fresh identifier the way the collaborator assigns them.
    ///
    /// Used by in-process collaborator implementations; production tasks
    /// always carry identifiers received from the remote service.
    #[must_use]
    pub fn mint() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
