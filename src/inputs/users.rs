//! User, role, and rate inputs.

use serde::Serialize;

use super::require_text;
use crate::error::HarvestError;

/// Body for `POST /users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateUser {
    /// First name (required).
    pub first_name: String,

    /// Last name (required).
    pub last_name: String,

    /// Email address (required).
    pub email: String,

    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,

    /// Time zone name (defaults to the company's).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Whether the user is added to new projects automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_access_to_all_future_projects: Option<bool>,

    /// Whether the user is a contractor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_contractor: Option<bool>,

    /// Whether the user is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Weekly capacity in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_capacity: Option<u32>,

    /// Default billable rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hourly_rate: Option<f64>,

    /// Cost rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_rate: Option<f64>,

    /// Role names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,

    /// Access roles, e.g. `administrator`, `manager`, `member`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_roles: Option<Vec<String>>,
}

impl CreateUser {
    /// A user with the required fields set.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Checks required fields.
    pub fn validate(&self) -> Result<(), HarvestError> {
        require_text("first_name", &self.first_name)?;
        require_text("last_name", &self.last_name)?;
        require_text("email", &self.email)
    }
}

/// Body for `PATCH /users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateUser {
    /// New first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// New last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,

    /// New time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Future projects flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_access_to_all_future_projects: Option<bool>,

    /// Contractor flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_contractor: Option<bool>,

    /// Archive or restore.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Weekly capacity in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_capacity: Option<u32>,

    /// Default billable rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hourly_rate: Option<f64>,

    /// Cost rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_rate: Option<f64>,

    /// Role names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,

    /// Access roles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_roles: Option<Vec<String>>,
}

/// Body for creating or updating a role.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoleInput {
    /// Role name (required on create).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Users holding the role; replaces the current list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<u64>>,
}

impl RoleInput {
    /// A role with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            user_ids: None,
        }
    }

    /// Sets the users holding the role.
    pub fn user_ids(mut self, user_ids: Vec<u64>) -> Self {
        self.user_ids = Some(user_ids);
        self
    }

    /// Checks that a role being created has a name.
    pub fn validate_create(&self) -> Result<(), HarvestError> {
        require_text("name", self.name.as_deref().unwrap_or_default())
    }
}

/// Body for `POST /users/{id}/billable_rates` and `/cost_rates`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateRate {
    /// Rate amount (required).
    pub amount: f64,

    /// Date the rate takes effect; defaults to the start of time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

impl CreateRate {
    /// A rate of `amount`.
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            start_date: None,
        }
    }

    /// Sets the start date (YYYY-MM-DD).
    pub fn starting(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }

    /// Rejects negative or non-finite amounts.
    pub fn validate(&self) -> Result<(), HarvestError> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(HarvestError::validation(format!(
                "rate amount must be a non-negative number, got {}",
                self.amount
            )));
        }
        Ok(())
    }
}

/// A billable rate body.
pub type CreateBillableRate = CreateRate;

/// A cost rate body.
pub type CreateCostRate = CreateRate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_validation() {
        assert!(CreateUser::new("George", "Frank", "george@example.com").validate().is_ok());
        assert!(CreateUser::new("George", "Frank", "").validate().is_err());
    }

    #[test]
    fn test_role_body() {
        let input = RoleInput::new("Marketing").user_ids(vec![1782974]);
        assert!(input.validate_create().is_ok());
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({"name": "Marketing", "user_ids": [1782974]})
        );
        assert!(RoleInput::default().validate_create().is_err());
    }

    #[test]
    fn test_rate_body() {
        let rate = CreateRate::new(8.0).starting("2020-05-01");
        assert!(rate.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&rate).unwrap(),
            serde_json::json!({"amount": 8.0, "start_date": "2020-05-01"})
        );
        assert!(CreateRate::new(-1.0).validate().is_err());
        assert!(CreateRate::new(f64::NAN).validate().is_err());
    }
}
