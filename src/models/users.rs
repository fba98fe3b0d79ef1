//! Users, their rates, and their project assignments.

use serde::{Deserialize, Serialize};

use super::{ClientRef, ProjectRef, TaskAssignment};
use crate::pagination::paged_list;

/// A user of the Harvest account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user id.
    pub id: u64,

    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Email address.
    pub email: String,

    /// Telephone number.
    #[serde(default)]
    pub telephone: Option<String>,

    /// Time zone name, e.g. `Eastern Time (US & Canada)`.
    pub timezone: String,

    /// Whether the user is added to new projects automatically.
    #[serde(default)]
    pub has_access_to_all_future_projects: bool,

    /// Whether the user is a contractor.
    #[serde(default)]
    pub is_contractor: bool,

    /// Whether the user is an administrator (legacy permission field).
    #[serde(default)]
    pub is_admin: Option<bool>,

    /// Whether the user is a project manager (legacy permission field).
    #[serde(default)]
    pub is_project_manager: Option<bool>,

    /// Whether the user can see billable rates (legacy permission field).
    #[serde(default)]
    pub can_see_rates: Option<bool>,

    /// Whether the user can create projects (legacy permission field).
    #[serde(default)]
    pub can_create_projects: Option<bool>,

    /// Whether the user can create invoices (legacy permission field).
    #[serde(default)]
    pub can_create_invoices: Option<bool>,

    /// Whether the user is active or archived.
    pub is_active: bool,

    /// Weekly capacity in seconds.
    #[serde(default)]
    pub weekly_capacity: u32,

    /// Default billable rate.
    #[serde(default)]
    pub default_hourly_rate: Option<f64>,

    /// Cost rate.
    #[serde(default)]
    pub cost_rate: Option<f64>,

    /// Role names.
    #[serde(default)]
    pub roles: Vec<String>,

    /// Permission roles, e.g. `administrator`, `manager`, `member`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_roles: Option<Vec<String>>,

    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

impl User {
    /// `first last`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A billable or cost rate for a user over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    /// Unique rate id.
    pub id: u64,

    /// Rate amount.
    pub amount: f64,

    /// First day the rate applies; `None` for the earliest rate.
    #[serde(default)]
    pub start_date: Option<String>,

    /// Last day the rate applies; `None` for the current rate.
    #[serde(default)]
    pub end_date: Option<String>,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

/// A user's billable rate.
pub type BillableRate = Rate;

/// A user's cost rate.
pub type CostRate = Rate;

/// A project the user is assigned to, with the project's task assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAssignment {
    /// Unique user assignment id.
    pub id: u64,

    /// Whether the assignment is active.
    pub is_active: bool,

    /// Whether the user manages the project.
    #[serde(default)]
    pub is_project_manager: bool,

    /// Whether the user's default rates apply.
    #[serde(default)]
    pub use_default_rates: bool,

    /// Billable rate for this user on this project.
    #[serde(default)]
    pub hourly_rate: Option<f64>,

    /// Budget for this user on this project.
    #[serde(default)]
    pub budget: Option<f64>,

    /// The project.
    pub project: ProjectRef,

    /// The project's client.
    pub client: ClientRef,

    /// Tasks on the project.
    #[serde(default)]
    pub task_assignments: Vec<TaskAssignment>,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

paged_list!(
    /// A page of users.
    Users,
    users: User
);

paged_list!(
    /// A page of billable rates.
    BillableRates,
    billable_rates: BillableRate
);

paged_list!(
    /// A page of cost rates.
    CostRates,
    cost_rates: CostRate
);

paged_list!(
    /// A page of project assignments.
    ProjectAssignments,
    project_assignments: ProjectAssignment
);
