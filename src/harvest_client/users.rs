//! Users, roles, rates, and project assignments.

use super::HarvestClient;
use crate::error::HarvestError;
use crate::inputs::{CreateBillableRate, CreateCostRate, CreateUser, RoleInput, UpdateUser};
use crate::models::{
    BillableRate, BillableRates, CostRate, CostRates, ProjectAssignments, Role, Roles, User,
    Users,
};
use crate::pagination::ListParams;

impl HarvestClient {
    /// Lists users. Supports `is_active` and `updated_since`.
    pub async fn users(&self, params: &ListParams) -> Result<Users, HarvestError> {
        self.list("/users", params).await
    }

    /// Retrieves the user the token belongs to.
    pub async fn get_currently_authenticated_user(&self) -> Result<User, HarvestError> {
        self.get("/users/me", &[]).await
    }

    /// Retrieves a user.
    pub async fn get_user(&self, user_id: u64) -> Result<User, HarvestError> {
        self.get(&format!("/users/{}", user_id), &[]).await
    }

    /// Creates a user and sends them an invitation.
    pub async fn create_user(&self, input: &CreateUser) -> Result<User, HarvestError> {
        input.validate()?;
        self.post("/users", &Self::to_body(input)?).await
    }

    /// Updates a user.
    pub async fn update_user(&self, user_id: u64, input: &UpdateUser) -> Result<User, HarvestError> {
        let body = Self::update_body(input)?;
        self.patch(&format!("/users/{}", user_id), &body).await
    }

    /// Deletes a user with no tracked time or expenses.
    pub async fn delete_user(&self, user_id: u64) -> Result<(), HarvestError> {
        self.delete(&format!("/users/{}", user_id)).await
    }

    /// Lists roles.
    pub async fn roles(&self, params: &ListParams) -> Result<Roles, HarvestError> {
        self.list("/roles", params).await
    }

    /// Retrieves a role.
    pub async fn get_role(&self, role_id: u64) -> Result<Role, HarvestError> {
        self.get(&format!("/roles/{}", role_id), &[]).await
    }

    /// Creates a role. `name` is required.
    pub async fn create_role(&self, input: &RoleInput) -> Result<Role, HarvestError> {
        input.validate_create()?;
        self.post("/roles", &Self::to_body(input)?).await
    }

    /// Updates a role. Setting `user_ids` replaces the role's members.
    pub async fn update_role(&self, role_id: u64, input: &RoleInput) -> Result<Role, HarvestError> {
        let body = Self::update_body(input)?;
        self.patch(&format!("/roles/{}", role_id), &body).await
    }

    /// Deletes a role.
    pub async fn delete_role(&self, role_id: u64) -> Result<(), HarvestError> {
        self.delete(&format!("/roles/{}", role_id)).await
    }

    /// Lists a user's billable rates, oldest first.
    pub async fn billable_rates(
        &self,
        user_id: u64,
        params: &ListParams,
    ) -> Result<BillableRates, HarvestError> {
        self.list(&format!("/users/{}/billable_rates", user_id), params)
            .await
    }

    /// Retrieves one billable rate.
    pub async fn get_billable_rate(
        &self,
        user_id: u64,
        billable_rate_id: u64,
    ) -> Result<BillableRate, HarvestError> {
        let path = format!("/users/{}/billable_rates/{}", user_id, billable_rate_id);
        self.get(&path, &[]).await
    }

    /// Adds a billable rate, ending the previous one the day before it starts.
    pub async fn create_billable_rate(
        &self,
        user_id: u64,
        input: &CreateBillableRate,
    ) -> Result<BillableRate, HarvestError> {
        input.validate()?;
        let path = format!("/users/{}/billable_rates", user_id);
        self.post(&path, &Self::to_body(input)?).await
    }

    /// Lists a user's cost rates, oldest first.
    pub async fn user_cost_rates(
        &self,
        user_id: u64,
        params: &ListParams,
    ) -> Result<CostRates, HarvestError> {
        self.list(&format!("/users/{}/cost_rates", user_id), params)
            .await
    }

    /// Retrieves one cost rate.
    pub async fn get_user_cost_rate(
        &self,
        user_id: u64,
        cost_rate_id: u64,
    ) -> Result<CostRate, HarvestError> {
        let path = format!("/users/{}/cost_rates/{}", user_id, cost_rate_id);
        self.get(&path, &[]).await
    }

    /// Adds a cost rate.
    pub async fn create_user_cost_rate(
        &self,
        user_id: u64,
        input: &CreateCostRate,
    ) -> Result<CostRate, HarvestError> {
        input.validate()?;
        let path = format!("/users/{}/cost_rates", user_id);
        self.post(&path, &Self::to_body(input)?).await
    }

    /// Lists the active projects a user is assigned to, with their task assignments.
    pub async fn project_assignments(
        &self,
        user_id: u64,
        params: &ListParams,
    ) -> Result<ProjectAssignments, HarvestError> {
        self.list(&format!("/users/{}/project_assignments", user_id), params)
            .await
    }

    /// Lists the active project assignments of the authenticated user.
    pub async fn my_project_assignments(
        &self,
        params: &ListParams,
    ) -> Result<ProjectAssignments, HarvestError> {
        self.list("/users/me/project_assignments", params).await
    }
}
