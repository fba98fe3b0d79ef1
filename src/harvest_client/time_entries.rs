//! Time entries.
//!
//! An account tracks time either by duration or by start and end time,
//! depending on the company's `wants_timestamp_timers` setting. Each create
//! call checks that setting first and refuses to send a body of the wrong
//! shape.

use super::HarvestClient;
use crate::error::HarvestError;
use crate::inputs::{CreateTimeEntryDuration, CreateTimeEntryStartEnd, UpdateTimeEntry};
use crate::models::{TimeEntries, TimeEntry};
use crate::pagination::ListParams;

impl HarvestClient {
    /// Lists time entries, newest first.
    ///
    /// Supports `user_id`, `client_id`, `project_id`, `task_id`, `is_billed`,
    /// `is_running`, `updated_since`, `from` and `to`.
    pub async fn time_entries(&self, params: &ListParams) -> Result<TimeEntries, HarvestError> {
        self.list("/time_entries", params).await
    }

    /// Retrieves a time entry.
    pub async fn get_time_entry(&self, time_entry_id: u64) -> Result<TimeEntry, HarvestError> {
        self.get(&format!("/time_entries/{}", time_entry_id), &[]).await
    }

    /// Creates a time entry from a duration.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Validation` without sending anything if the
    /// account tracks time by start and end time.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let input = CreateTimeEntryDuration {
    ///     hours: Some(1.0),
    ///     ..CreateTimeEntryDuration::new(14307913, 8083365, "2017-03-21")
    /// };
    /// let entry = client.create_time_entry_via_duration(&input).await?;
    /// ```
    pub async fn create_time_entry_via_duration(
        &self,
        input: &CreateTimeEntryDuration,
    ) -> Result<TimeEntry, HarvestError> {
        input.validate()?;
        self.ensure_timer_mode(false).await?;
        self.post("/time_entries", &Self::to_body(input)?).await
    }

    /// Creates a time entry from a start and end time.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Validation` without sending anything if the
    /// account tracks time by duration.
    pub async fn create_time_entry_via_start_and_end_time(
        &self,
        input: &CreateTimeEntryStartEnd,
    ) -> Result<TimeEntry, HarvestError> {
        input.validate()?;
        self.ensure_timer_mode(true).await?;
        self.post("/time_entries", &Self::to_body(input)?).await
    }

    /// Updates a time entry.
    pub async fn update_time_entry(
        &self,
        time_entry_id: u64,
        input: &UpdateTimeEntry,
    ) -> Result<TimeEntry, HarvestError> {
        let body = Self::update_body(input)?;
        self.patch(&format!("/time_entries/{}", time_entry_id), &body)
            .await
    }

    /// Deletes a time entry. Locked entries cannot be deleted.
    pub async fn delete_time_entry(&self, time_entry_id: u64) -> Result<(), HarvestError> {
        self.delete(&format!("/time_entries/{}", time_entry_id)).await
    }

    /// Removes the external reference from a time entry.
    pub async fn delete_time_entry_external_reference(
        &self,
        time_entry_id: u64,
    ) -> Result<(), HarvestError> {
        self.delete(&format!("/time_entries/{}/external_reference", time_entry_id))
            .await
    }

    /// Restarts a stopped time entry's timer.
    pub async fn restart_time_entry(&self, time_entry_id: u64) -> Result<TimeEntry, HarvestError> {
        self.patch_empty(&format!("/time_entries/{}/restart", time_entry_id))
            .await
    }

    /// Stops a running time entry's timer.
    pub async fn stop_time_entry(&self, time_entry_id: u64) -> Result<TimeEntry, HarvestError> {
        self.patch_empty(&format!("/time_entries/{}/stop", time_entry_id))
            .await
    }

    /// Fails unless the company's `wants_timestamp_timers` equals `timestamps`.
    async fn ensure_timer_mode(&self, timestamps: bool) -> Result<(), HarvestError> {
        let company = self.company().await?;
        if company.wants_timestamp_timers == timestamps {
            return Ok(());
        }

        tracing::debug!(
            wants_timestamp_timers = company.wants_timestamp_timers,
            "Time entry shape does not match the account's timer mode"
        );

        Err(HarvestError::validation(if timestamps {
            "this account tracks time by duration; use create_time_entry_via_duration"
        } else {
            "this account tracks time by start and end time; use create_time_entry_via_start_and_end_time"
        }))
    }
}
