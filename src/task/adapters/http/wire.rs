//! Wire payloads exchanged with the remote collaborator.
//!
//! All payloads are JSON. Listing returns an array of [`TaskRecord`];
//! mutation responses are ignored beyond success or failure. The create
//! payload carries no `id` key at all, and the status-only update carries
//! nothing besides `id` and `status`.

use serde::{Deserialize, Serialize};

use crate::task::domain::{Task, TaskError, TaskFields, TaskId, TaskStatus};

/// A task record as returned by the collaborator's list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct TaskRecord {
    id: String,
    title: String,
    description: String,
    status: TaskStatus,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let id = TaskId::new(record.id)?;
        let fields = TaskFields::new(record.title, record.description, record.status)?;
        Ok(Self::new(id, fields))
    }
}

/// Create request body: the three editable fields and no identifier.
#[derive(Debug, Serialize)]
pub(super) struct CreateBody<'a> {
    title: &'a str,
    description: &'a str,
    status: TaskStatus,
}

impl<'a> CreateBody<'a> {
    pub(super) fn from_fields(fields: &'a TaskFields) -> Self {
        Self {
            title: fields.title(),
            description: fields.description(),
            status: fields.status(),
        }
    }
}

/// Full-overwrite update request body.
#[derive(Debug, Serialize)]
pub(super) struct UpdateBody<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    status: TaskStatus,
}

impl<'a> UpdateBody<'a> {
    pub(super) fn from_parts(id: &'a TaskId, fields: &'a TaskFields) -> Self {
        Self {
            id: id.as_str(),
            title: fields.title(),
            description: fields.description(),
            status: fields.status(),
        }
    }
}

/// Status-only partial update request body.
#[derive(Debug, Serialize)]
pub(super) struct StatusBody<'a> {
    id: &'a str,
    status: TaskStatus,
}

impl<'a> StatusBody<'a> {
    pub(super) fn from_parts(id: &'a TaskId, status: TaskStatus) -> Self {
        Self {
            id: id.as_str(),
            status,
        }
    }
}

/// Delete request body.
#[derive(Debug, Serialize)]
pub(super) struct DeleteBody<'a> {
    id: &'a str,
}

impl<'a> DeleteBody<'a> {
    pub(super) fn from_id(id: &'a TaskId) -> Self {
        Self { id: id.as_str() }
    }
}
