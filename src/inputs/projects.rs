//! Project, user assignment, and task assignment inputs.

use serde::Serialize;

use super::{require_id, require_text};
use crate::error::HarvestError;

/// Body for `POST /projects`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateProject {
    /// Client the project belongs to (required).
    pub client_id: u64,

    /// Project name (required).
    pub name: String,

    /// Whether the project is billable (required).
    pub is_billable: bool,

    /// Billing method: `Project`, `Tasks`, `People` or `none` (required).
    pub bill_by: String,

    /// Budget method: `project`, `project_cost`, `task`, `task_fees`, `person` or `none` (required).
    pub budget_by: String,

    /// Project code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Whether the project is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Whether the project is fixed-fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fixed_fee: Option<bool>,

    /// Rate used when billing by project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,

    /// Budget in hours or money.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    /// Whether the budget resets monthly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_is_monthly: Option<bool>,

    /// Whether to notify when over budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_when_over_budget: Option<bool>,

    /// Percentage of budget at which to notify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub over_budget_notification_percentage: Option<f64>,

    /// Whether everyone on the project sees the budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_budget_to_all: Option<bool>,

    /// Monetary budget when budgeting by total cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_budget: Option<f64>,

    /// Whether expenses count against the cost budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_budget_include_expenses: Option<bool>,

    /// Fixed fee amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,

    /// Notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Start date (YYYY-MM-DD).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<String>,

    /// End date (YYYY-MM-DD).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<String>,
}

impl CreateProject {
    /// A project with the required fields set.
    pub fn new(
        client_id: u64,
        name: impl Into<String>,
        is_billable: bool,
        bill_by: impl Into<String>,
        budget_by: impl Into<String>,
    ) -> Self {
        Self {
            client_id,
            name: name.into(),
            is_billable,
            bill_by: bill_by.into(),
            budget_by: budget_by.into(),
            ..Self::default()
        }
    }

    /// Checks required fields.
    pub fn validate(&self) -> Result<(), HarvestError> {
        require_id("client_id", self.client_id)?;
        require_text("name", &self.name)?;
        require_text("bill_by", &self.bill_by)?;
        require_text("budget_by", &self.budget_by)
    }
}

/// Body for `PATCH /projects/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateProject {
    /// Move the project to another client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,

    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Archive or restore.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Billable flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_billable: Option<bool>,

    /// Fixed-fee flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fixed_fee: Option<bool>,

    /// Billing method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_by: Option<String>,

    /// Project rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,

    /// Budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    /// Budget method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_by: Option<String>,

    /// Monthly budget flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_is_monthly: Option<bool>,

    /// Over-budget notification flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_when_over_budget: Option<bool>,

    /// Over-budget notification threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub over_budget_notification_percentage: Option<f64>,

    /// Budget visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_budget_to_all: Option<bool>,

    /// Cost budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_budget: Option<f64>,

    /// Whether expenses count against the cost budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_budget_include_expenses: Option<bool>,

    /// Fixed fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,

    /// Notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Start date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<String>,

    /// End date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<String>,
}

/// Body for `POST /projects/{id}/user_assignments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateUserAssignment {
    /// User to assign (required).
    pub user_id: u64,

    /// Whether the assignment is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Whether the user manages the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_project_manager: Option<bool>,

    /// Whether the user's default rates apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_default_rates: Option<bool>,

    /// Rate for this user on this project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,

    /// Budget for this user on this project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
}

impl CreateUserAssignment {
    /// Assigns `user_id` with Harvest's defaults.
    pub fn new(user_id: u64) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    /// Checks required fields.
    pub fn validate(&self) -> Result<(), HarvestError> {
        require_id("user_id", self.user_id)
    }
}

/// Body for `PATCH /projects/{id}/user_assignments/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateUserAssignment {
    /// Active flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Project manager flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_project_manager: Option<bool>,

    /// Default rates flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_default_rates: Option<bool>,

    /// Rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,

    /// Budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
}

/// Body for `POST /projects/{id}/task_assignments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTaskAssignment {
    /// Task to assign (required).
    pub task_id: u64,

    /// Whether the assignment is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Whether time on the task is billable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,

    /// Rate for this task on this project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,

    /// Budget for this task on this project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
}

impl CreateTaskAssignment {
    /// Assigns `task_id` with Harvest's defaults.
    pub fn new(task_id: u64) -> Self {
        Self {
            task_id,
            ..Self::default()
        }
    }

    /// Checks required fields.
    pub fn validate(&self) -> Result<(), HarvestError> {
        require_id("task_id", self.task_id)
    }
}

/// Body for `PATCH /projects/{id}/task_assignments/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTaskAssignment {
    /// Active flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Billable flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,

    /// Rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,

    /// Budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
}
