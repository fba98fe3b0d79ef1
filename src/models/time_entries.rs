//! Time entries.

use serde::{Deserialize, Serialize};

use super::{ClientRef, InvoiceRef, ProjectRef, TaskAssignment, TaskRef, UserAssignment, UserRef};
use crate::pagination::paged_list;

/// A link from a time entry to an item in another service (e.g. a ticket).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalReference {
    /// Id of the item in the external service.
    pub id: String,

    /// Group id of the item in the external service.
    #[serde(default)]
    pub group_id: Option<String>,

    /// Account id in the external service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// URL of the external item.
    pub permalink: String,

    /// Name of the external service.
    #[serde(default)]
    pub service: Option<String>,

    /// Icon of the external service.
    #[serde(default)]
    pub service_icon_url: Option<String>,
}

/// A block of time tracked by a user against a project task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique time entry id.
    pub id: u64,

    /// Date the time was spent (YYYY-MM-DD).
    pub spent_date: String,

    /// Who tracked the time.
    pub user: UserRef,

    /// The user's assignment on the project.
    pub user_assignment: UserAssignment,

    /// The project's client.
    pub client: ClientRef,

    /// The project.
    pub project: ProjectRef,

    /// The task.
    pub task: TaskRef,

    /// The task's assignment on the project.
    pub task_assignment: TaskAssignment,

    /// Link to an external item, if any.
    #[serde(default)]
    pub external_reference: Option<ExternalReference>,

    /// The invoice the entry was billed on, if any.
    #[serde(default)]
    pub invoice: Option<InvoiceRef>,

    /// Tracked hours.
    pub hours: f64,

    /// Hours tracked before the timer was last started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_without_timer: Option<f64>,

    /// Hours after the account's rounding rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounded_hours: Option<f64>,

    /// Notes.
    #[serde(default)]
    pub notes: Option<String>,

    /// Whether the entry is locked (approved or invoiced).
    pub is_locked: bool,

    /// Why the entry is locked.
    #[serde(default)]
    pub locked_reason: Option<String>,

    /// Whether the entry was approved.
    pub is_closed: bool,

    /// Whether the entry was invoiced.
    pub is_billed: bool,

    /// When the running timer was started.
    #[serde(default)]
    pub timer_started_at: Option<String>,

    /// Start time, e.g. `8:00am` (timestamp-timer accounts).
    #[serde(default)]
    pub started_time: Option<String>,

    /// End time, e.g. `9:00am` (timestamp-timer accounts).
    #[serde(default)]
    pub ended_time: Option<String>,

    /// Whether a timer is running.
    pub is_running: bool,

    /// Whether the entry is billable.
    pub billable: bool,

    /// Whether the entry counts against the project budget.
    pub budgeted: bool,

    /// Billable rate.
    #[serde(default)]
    pub billable_rate: Option<f64>,

    /// Cost rate.
    #[serde(default)]
    pub cost_rate: Option<f64>,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

paged_list!(
    /// A page of time entries.
    TimeEntries,
    time_entries: TimeEntry
);
