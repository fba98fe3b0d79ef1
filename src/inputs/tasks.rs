//! Task inputs.

use serde::Serialize;

use super::require_text;
use crate::error::HarvestError;

/// Body for `POST /tasks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTask {
    /// Task name (required).
    pub name: String,

    /// Whether new project assignments default to billable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_by_default: Option<bool>,

    /// Default rate for new project assignments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hourly_rate: Option<f64>,

    /// Whether the task is added to new projects automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    /// Whether the task is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl CreateTask {
    /// A task with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Checks required fields.
    pub fn validate(&self) -> Result<(), HarvestError> {
        require_text("name", &self.name)
    }
}

/// Body for `PATCH /tasks/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTask {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Billable default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_by_default: Option<bool>,

    /// Default rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hourly_rate: Option<f64>,

    /// Default task flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    /// Archive or restore.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
