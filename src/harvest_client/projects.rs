//! Projects and their user and task assignments.

use super::HarvestClient;
use crate::error::HarvestError;
use crate::inputs::{
    CreateProject, CreateTaskAssignment, CreateUserAssignment, UpdateProject,
    UpdateTaskAssignment, UpdateUserAssignment,
};
use crate::models::{
    Project, Projects, TaskAssignment, TaskAssignments, UserAssignment, UserAssignments,
};
use crate::pagination::ListParams;

impl HarvestClient {
    /// Lists projects. Supports `is_active`, `client_id` and `updated_since`.
    pub async fn projects(&self, params: &ListParams) -> Result<Projects, HarvestError> {
        self.list("/projects", params).await
    }

    /// Retrieves a project.
    pub async fn get_project(&self, project_id: u64) -> Result<Project, HarvestError> {
        self.get(&format!("/projects/{}", project_id), &[]).await
    }

    /// Creates a project.
    pub async fn create_project(&self, input: &CreateProject) -> Result<Project, HarvestError> {
        input.validate()?;
        self.post("/projects", &Self::to_body(input)?).await
    }

    /// Updates a project.
    pub async fn update_project(
        &self,
        project_id: u64,
        input: &UpdateProject,
    ) -> Result<Project, HarvestError> {
        let body = Self::update_body(input)?;
        self.patch(&format!("/projects/{}", project_id), &body).await
    }

    /// Deletes a project along with its time entries and expenses.
    pub async fn delete_project(&self, project_id: u64) -> Result<(), HarvestError> {
        self.delete(&format!("/projects/{}", project_id)).await
    }

    /// Lists user assignments across all projects.
    pub async fn user_assignments(
        &self,
        params: &ListParams,
    ) -> Result<UserAssignments, HarvestError> {
        self.list("/user_assignments", params).await
    }

    /// Lists the user assignments of one project.
    pub async fn project_user_assignments(
        &self,
        project_id: u64,
        params: &ListParams,
    ) -> Result<UserAssignments, HarvestError> {
        self.list(&format!("/projects/{}/user_assignments", project_id), params)
            .await
    }

    /// Retrieves a user assignment on a project.
    pub async fn get_user_assignment(
        &self,
        project_id: u64,
        user_assignment_id: u64,
    ) -> Result<UserAssignment, HarvestError> {
        let path = format!(
            "/projects/{}/user_assignments/{}",
            project_id, user_assignment_id
        );
        self.get(&path, &[]).await
    }

    /// Assigns a user to a project.
    pub async fn create_user_assignment(
        &self,
        project_id: u64,
        input: &CreateUserAssignment,
    ) -> Result<UserAssignment, HarvestError> {
        input.validate()?;
        let path = format!("/projects/{}/user_assignments", project_id);
        self.post(&path, &Self::to_body(input)?).await
    }

    /// Updates a user assignment.
    pub async fn update_user_assignment(
        &self,
        project_id: u64,
        user_assignment_id: u64,
        input: &UpdateUserAssignment,
    ) -> Result<UserAssignment, HarvestError> {
        let body = Self::update_body(input)?;
        let path = format!(
            "/projects/{}/user_assignments/{}",
            project_id, user_assignment_id
        );
        self.patch(&path, &body).await
    }

    /// Removes a user from a project. Fails if the user has tracked time there.
    pub async fn delete_user_assignment(
        &self,
        project_id: u64,
        user_assignment_id: u64,
    ) -> Result<(), HarvestError> {
        let path = format!(
            "/projects/{}/user_assignments/{}",
            project_id, user_assignment_id
        );
        self.delete(&path).await
    }

    /// Lists task assignments across all projects.
    pub async fn task_assignments(
        &self,
        params: &ListParams,
    ) -> Result<TaskAssignments, HarvestError> {
        self.list("/task_assignments", params).await
    }

    /// Lists the task assignments of one project.
    pub async fn project_task_assignments(
        &self,
        project_id: u64,
        params: &ListParams,
    ) -> Result<TaskAssignments, HarvestError> {
        self.list(&format!("/projects/{}/task_assignments", project_id), params)
            .await
    }

    /// Retrieves a task assignment on a project.
    pub async fn get_task_assignment(
        &self,
        project_id: u64,
        task_assignment_id: u64,
    ) -> Result<TaskAssignment, HarvestError> {
        let path = format!(
            "/projects/{}/task_assignments/{}",
            project_id, task_assignment_id
        );
        self.get(&path, &[]).await
    }

    /// Assigns a task to a project.
    pub async fn create_task_assignment(
        &self,
        project_id: u64,
        input: &CreateTaskAssignment,
    ) -> Result<TaskAssignment, HarvestError> {
        input.validate()?;
        let path = format!("/projects/{}/task_assignments", project_id);
        self.post(&path, &Self::to_body(input)?).await
    }

    /// Updates a task assignment.
    pub async fn update_task_assignment(
        &self,
        project_id: u64,
        task_assignment_id: u64,
        input: &UpdateTaskAssignment,
    ) -> Result<TaskAssignment, HarvestError> {
        let body = Self::update_body(input)?;
        let path = format!(
            "/projects/{}/task_assignments/{}",
            project_id, task_assignment_id
        );
        self.patch(&path, &body).await
    }

    /// Removes a task from a project. Fails if time was tracked against it.
    pub async fn delete_task_assignment(
        &self,
        project_id: u64,
        task_assignment_id: u64,
    ) -> Result<(), HarvestError> {
        let path = format!(
            "/projects/{}/task_assignments/{}",
            project_id, task_assignment_id
        );
        self.delete(&path).await
    }
}
