//! Projects and their user/task assignments.

use serde::{Deserialize, Serialize};

use super::{ClientRef, ProjectRef, TaskRef, UserRef};
use crate::pagination::paged_list;

/// A project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project id.
    pub id: u64,

    /// The client the project belongs to.
    pub client: ClientRef,

    /// Project name.
    pub name: String,

    /// Project code.
    #[serde(default)]
    pub code: Option<String>,

    /// Whether the project is active or archived.
    pub is_active: bool,

    /// Whether the project is billable.
    pub is_billable: bool,

    /// Whether the project is fixed-fee.
    #[serde(default)]
    pub is_fixed_fee: bool,

    /// Billing method: `Project`, `Tasks`, `People` or `none`.
    pub bill_by: String,

    /// Rate used when billing by project.
    #[serde(default)]
    pub hourly_rate: Option<f64>,

    /// Budget in hours or money, depending on `budget_by`.
    #[serde(default)]
    pub budget: Option<f64>,

    /// Budget method: `project`, `project_cost`, `task`, `task_fees`, `person` or `none`.
    pub budget_by: String,

    /// Whether the budget resets every month.
    #[serde(default)]
    pub budget_is_monthly: bool,

    /// Whether project managers are notified when over budget.
    #[serde(default)]
    pub notify_when_over_budget: bool,

    /// Percentage of budget at which to notify.
    #[serde(default)]
    pub over_budget_notification_percentage: Option<f64>,

    /// Date of the last over-budget notification.
    #[serde(default)]
    pub over_budget_notification_date: Option<String>,

    /// Whether the budget is visible to everyone on the project.
    #[serde(default)]
    pub show_budget_to_all: bool,

    /// Monetary budget when budgeting by total cost.
    #[serde(default)]
    pub cost_budget: Option<f64>,

    /// Whether expenses count against the cost budget.
    #[serde(default)]
    pub cost_budget_include_expenses: bool,

    /// Fixed fee amount.
    #[serde(default)]
    pub fee: Option<f64>,

    /// Project notes.
    #[serde(default)]
    pub notes: Option<String>,

    /// Start date (YYYY-MM-DD).
    #[serde(default)]
    pub starts_on: Option<String>,

    /// End date (YYYY-MM-DD).
    #[serde(default)]
    pub ends_on: Option<String>,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

/// A user's membership on a project.
///
/// Time entries and expenses embed this record without `project`, `user`
/// and `use_default_rates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAssignment {
    /// Unique assignment id.
    pub id: u64,

    /// The project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRef>,

    /// The user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,

    /// Whether the assignment is active.
    pub is_active: bool,

    /// Whether the user manages the project.
    #[serde(default)]
    pub is_project_manager: bool,

    /// Whether the user's default rates apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_default_rates: Option<bool>,

    /// Billable rate for this user on this project.
    #[serde(default)]
    pub hourly_rate: Option<f64>,

    /// Budget for this user on this project.
    #[serde(default)]
    pub budget: Option<f64>,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

/// A task's membership on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAssignment {
    /// Unique assignment id.
    pub id: u64,

    /// The project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRef>,

    /// The task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<TaskRef>,

    /// Whether the assignment is active.
    pub is_active: bool,

    /// Whether time on this task is billable.
    pub billable: bool,

    /// Billable rate for this task on this project.
    #[serde(default)]
    pub hourly_rate: Option<f64>,

    /// Budget for this task on this project.
    #[serde(default)]
    pub budget: Option<f64>,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

paged_list!(
    /// A page of projects.
    Projects,
    projects: Project
);

paged_list!(
    /// A page of user assignments.
    UserAssignments,
    user_assignments: UserAssignment
);

paged_list!(
    /// A page of task assignments.
    TaskAssignments,
    task_assignments: TaskAssignment
);
