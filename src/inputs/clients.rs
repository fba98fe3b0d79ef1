//! Client and client contact inputs.

use serde::Serialize;

use super::{require_id, require_text};
use crate::error::HarvestError;

/// Body for `POST /clients`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateClient {
    /// Client name (required).
    pub name: String,

    /// Whether the client is active (Harvest defaults to true).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Physical address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Invoice currency code (defaults to the company currency).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl CreateClient {
    /// A client with the given name.
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

/// Body for `PATCH /clients/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateClient {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Archive (`false`) or restore (`true`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// New address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// New currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Body for `POST /contacts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateClientContact {
    /// Client the contact belongs to (required).
    pub client_id: u64,

    /// First name (required).
    pub first_name: String,

    /// Job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Office phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_office: Option<String>,

    /// Mobile phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_mobile: Option<String>,

    /// Fax number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
}

impl CreateClientContact {
    /// A contact for `client_id` with the given first name.
    pub fn new(client_id: u64, first_name: impl Into<String>) -> Self {
        Self {
            client_id,
            first_name: first_name.into(),
            ..Self::default()
        }
    }

    /// Checks required fields.
    pub fn validate(&self) -> Result<(), HarvestError> {
        require_id("client_id", self.client_id)?;
        require_text("first_name", &self.first_name)
    }
}

/// Body for `PATCH /contacts/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateClientContact {
    /// Move the contact to another client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,

    /// New job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// New last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New office phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_office: Option<String>,

    /// New mobile phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_mobile: Option<String>,

    /// New fax number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
}
