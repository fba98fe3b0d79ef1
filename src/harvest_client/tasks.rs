//! Tasks.

use super::HarvestClient;
use crate::error::HarvestError;
use crate::inputs::{CreateTask, UpdateTask};
use crate::models::{Task, Tasks};
use crate::pagination::ListParams;

impl HarvestClient {
    /// Lists tasks.
    pub async fn tasks(&self, params: &ListParams) -> Result<Tasks, HarvestError> {
        self.list("/tasks", params).await
    }

    /// Retrieves a task.
    pub async fn get_task(&self, task_id: u64) -> Result<Task, HarvestError> {
        self.get(&format!("/tasks/{}", task_id), &[]).await
    }

    /// Creates a task.
    pub async fn create_task(&self, input: &CreateTask) -> Result<Task, HarvestError> {
        input.validate()?;
        self.post("/tasks", &Self::to_body(input)?).await
    }

    /// Updates a task.
    pub async fn update_task(&self, task_id: u64, input: &UpdateTask) -> Result<Task, HarvestError> {
        let body = Self::update_body(input)?;
        self.patch(&format!("/tasks/{}", task_id), &body).await
    }

    /// Deletes a task that has no tracked time.
    pub async fn delete_task(&self, task_id: u64) -> Result<(), HarvestError> {
        self.delete(&format!("/tasks/{}", task_id)).await
    }
}
