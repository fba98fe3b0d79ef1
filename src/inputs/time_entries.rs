//! Time entry inputs.
//!
//! Harvest accounts track time either as durations or as start/end times
//! (the company's `wants_timestamp_timers` setting), so there is one create
//! body per mode.

use serde::Serialize;

use super::{require_id, require_text};
use crate::error::HarvestError;

/// Link to an item in another service, sent with a time entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExternalReferenceInput {
    /// Id of the external item.
    pub id: String,

    /// Group id of the external item.
    pub group_id: String,

    /// Account id in the external service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// URL of the external item.
    pub permalink: String,
}

/// Body for `POST /time_entries` on duration accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTimeEntryDuration {
    /// User the time belongs to; defaults to the authenticated user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    /// Project (required).
    pub project_id: u64,

    /// Task (required).
    pub task_id: u64,

    /// Date the time was spent (required, YYYY-MM-DD).
    pub spent_date: String,

    /// Hours tracked; omitting it starts a running timer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,

    /// Notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// External item link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<ExternalReferenceInput>,
}

impl CreateTimeEntryDuration {
    /// An entry on `project_id`/`task_id` for `spent_date`.
    pub fn new(project_id: u64, task_id: u64, spent_date: impl Into<String>) -> Self {
        Self {
            project_id,
            task_id,
            spent_date: spent_date.into(),
            ..Self::default()
        }
    }

    /// Checks required fields and that hours are not negative.
    pub fn validate(&self) -> Result<(), HarvestError> {
        require_id("project_id", self.project_id)?;
        require_id("task_id", self.task_id)?;
        require_text("spent_date", &self.spent_date)?;
        if let Some(hours) = self.hours {
            if !hours.is_finite() || hours < 0.0 {
                return Err(HarvestError::validation(format!(
                    "hours must be a non-negative number, got {}",
                    hours
                )));
            }
        }
        Ok(())
    }
}

/// Body for `POST /time_entries` on timestamp-timer accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTimeEntryStartEnd {
    /// User the time belongs to; defaults to the authenticated user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    /// Project (required).
    pub project_id: u64,

    /// Task (required).
    pub task_id: u64,

    /// Date the time was spent (required, YYYY-MM-DD).
    pub spent_date: String,

    /// Start time, e.g. `8:00am`; omitting it uses the current time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_time: Option<String>,

    /// End time; omitting it starts a running timer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_time: Option<String>,

    /// Notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// External item link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<ExternalReferenceInput>,
}

impl CreateTimeEntryStartEnd {
    /// An entry on `project_id`/`task_id` for `spent_date`.
    pub fn new(project_id: u64, task_id: u64, spent_date: impl Into<String>) -> Self {
        Self {
            project_id,
            task_id,
            spent_date: spent_date.into(),
            ..Self::default()
        }
    }

    /// Sets the start and end times.
    pub fn between(mut self, started_time: impl Into<String>, ended_time: impl Into<String>) -> Self {
        self.started_time = Some(started_time.into());
        self.ended_time = Some(ended_time.into());
        self
    }

    /// Checks required fields.
    pub fn validate(&self) -> Result<(), HarvestError> {
        require_id("project_id", self.project_id)?;
        require_id("task_id", self.task_id)?;
        require_text("spent_date", &self.spent_date)
    }
}

/// Body for `PATCH /time_entries/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTimeEntry {
    /// Move to another project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    /// Move to another task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,

    /// New date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent_date: Option<String>,

    /// New start time (timestamp-timer accounts).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_time: Option<String>,

    /// New end time (timestamp-timer accounts).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_time: Option<String>,

    /// New hours (duration accounts).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,

    /// New notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// New external item link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<ExternalReferenceInput>,
}
