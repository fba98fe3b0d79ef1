//! Tasks.

use serde::{Deserialize, Serialize};

use crate::pagination::paged_list;

/// A task that time can be tracked against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task id.
    pub id: u64,

    /// Task name.
    pub name: String,

    /// Whether new project assignments of this task default to billable.
    pub billable_by_default: bool,

    /// Default rate for new project assignments.
    #[serde(default)]
    pub default_hourly_rate: Option<f64>,

    /// Whether the task is added to new projects automatically.
    pub is_default: bool,

    /// Whether the task is active or archived.
    pub is_active: bool,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

paged_list!(
    /// A page of tasks.
    Tasks,
    tasks: Task
);
