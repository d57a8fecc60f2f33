//! Reqwest-backed collaborator client.
//!
//! All operations target the single configured endpoint URL and speak
//! JSON in both directions. Response status codes are not inspected:
//! only transport-level failures and body-decode failures surface, and a
//! delivered response counts as success for mutations.

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::wire::{CreateBody, DeleteBody, StatusBody, TaskRecord, UpdateBody};
use crate::config::ApiConfig;
use crate::task::domain::{Task, TaskFields, TaskId, TaskStatus};
use crate::task::ports::{CollaboratorError, CollaboratorResult, TaskCollaborator};

/// HTTP implementation of the collaborator port.
#[derive(Debug, Clone)]
pub struct HttpTaskCollaborator {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTaskCollaborator {
    /// Creates a client against the configured endpoint.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Creates a client reusing an existing reqwest client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint().clone(),
        }
    }
}

#[async_trait]
impl TaskCollaborator for HttpTaskCollaborator {
    async fn list(&self) -> CollaboratorResult<Vec<Task>> {
        debug!(endpoint = %self.endpoint, "fetching task collection");
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(CollaboratorError::transport)?;
        let records: Vec<TaskRecord> = response.json().await.map_err(CollaboratorError::decode)?;
        records
            .into_iter()
            .map(|record| Task::try_from(record).map_err(CollaboratorError::decode))
            .collect()
    }

    async fn create(&self, fields: &TaskFields) -> CollaboratorResult<()> {
        debug!(title = fields.title(), "creating task");
        self.client
            .post(self.endpoint.clone())
            .json(&CreateBody::from_fields(fields))
            .send()
            .await
            .map_err(CollaboratorError::transport)?;
        Ok(())
    }

    async fn update(&self, id: &TaskId, fields: &TaskFields) -> CollaboratorResult<()> {
        debug!(%id, "updating task record");
        self.client
            .put(self.endpoint.clone())
            .json(&UpdateBody::from_parts(id, fields))
            .send()
            .await
            .map_err(CollaboratorError::transport)?;
        Ok(())
    }

    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> CollaboratorResult<()> {
        debug!(%id, %status, "updating task status");
        self.client
            .put(self.endpoint.clone())
            .json(&StatusBody::from_parts(id, status))
            .send()
            .await
            .map_err(CollaboratorError::transport)?;
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> CollaboratorResult<()> {
        debug!(%id, "deleting task");
        self.client
            .delete(self.endpoint.clone())
            .json(&DeleteBody::from_id(id))
            .send()
            .await
            .map_err(CollaboratorError::transport)?;
        Ok(())
    }
}
