//! Estimate and estimate message inputs.

use serde::Serialize;

use super::invoices::validate_recipients;
use super::{require_id, LineItemInput};
use crate::error::HarvestError;
use crate::models::Recipient;

/// Body for `POST /estimates`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateEstimate {
    /// Client to quote (required).
    pub client_id: u64,

    /// Estimate number; generated when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Purchase order number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order: Option<String>,

    /// First tax rate, in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,

    /// Second tax rate, in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax2: Option<f64>,

    /// Discount rate, in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,

    /// Subject line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Issue date (YYYY-MM-DD).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,

    /// Lines.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<LineItemInput>,
}

impl CreateEstimate {
    /// An estimate for `client_id`.
    pub fn new(client_id: u64) -> Self {
        Self {
            client_id,
            ..Self::default()
        }
    }

    /// Adds a line.
    pub fn line_item(mut self, item: LineItemInput) -> Self {
        self.line_items.push(item);
        self
    }

    /// Checks required fields and every line.
    pub fn validate(&self) -> Result<(), HarvestError> {
        require_id("client_id", self.client_id)?;
        for item in &self.line_items {
            item.validate()?;
        }
        Ok(())
    }
}

/// Body for `PATCH /estimates/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateEstimate {
    /// Move to another client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,

    /// Number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Purchase order number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order: Option<String>,

    /// First tax rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,

    /// Second tax rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax2: Option<f64>,

    /// Discount rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,

    /// Subject line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Issue date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
}

/// State changes recorded through `POST /estimates/{id}/messages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EstimateEvent {
    /// Mark a draft estimate as sent.
    #[serde(rename = "send")]
    Send,
    /// Mark an open estimate as accepted.
    #[serde(rename = "accept")]
    Accept,
    /// Mark an open estimate as declined.
    #[serde(rename = "decline")]
    Decline,
    /// Re-open a closed estimate.
    #[serde(rename = "re-open")]
    ReOpen,
}

/// Body for `POST /estimates/{id}/messages`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateEstimateMessage {
    /// Who receives the message (at least one).
    pub recipients: Vec<Recipient>,

    /// Subject; Harvest's default when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Body; Harvest's default when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Copy the sender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_me_a_copy: Option<bool>,
}

impl CreateEstimateMessage {
    /// A message to `recipients`.
    pub fn new(recipients: Vec<Recipient>) -> Self {
        Self {
            recipients,
            ..Self::default()
        }
    }

    /// Checks that there is at least one recipient and every one has an email.
    pub fn validate(&self) -> Result<(), HarvestError> {
        validate_recipients(&self.recipients)
    }
}
