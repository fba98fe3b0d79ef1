//! Invoice, invoice message, and invoice payment inputs.

use serde::Serialize;

use super::{require_id, require_text, LineItemInput};
use crate::error::HarvestError;
use crate::models::Recipient;

/// Body for `POST /invoices`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateInvoice {
    /// Client to bill (required).
    pub client_id: u64,

    /// Retainer to draw from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retainer_id: Option<u64>,

    /// Estimate the invoice is based on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate_id: Option<u64>,

    /// Invoice number; generated when omitted.
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

    /// Currency code (defaults to the client's).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Issue date (YYYY-MM-DD, defaults to today).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,

    /// Due date (YYYY-MM-DD).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Payment terms, e.g. `upon receipt`, `net 30`, `custom`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_term: Option<String>,

    /// Lines.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<LineItemInput>,
}

impl CreateInvoice {
    /// An invoice for `client_id`.
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

/// Body for `PATCH /invoices/{id}`.
///
/// Lines are edited through the dedicated line item calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateInvoice {
    /// Move to another client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,

    /// Retainer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retainer_id: Option<u64>,

    /// Estimate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate_id: Option<u64>,

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

    /// Due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Payment terms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_term: Option<String>,
}

/// State changes recorded through `POST /invoices/{id}/messages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InvoiceEvent {
    /// Mark a draft invoice as sent.
    #[serde(rename = "send")]
    Send,
    /// Mark an open invoice as closed.
    #[serde(rename = "close")]
    Close,
    /// Re-open a closed invoice.
    #[serde(rename = "re-open")]
    ReOpen,
    /// Return an open invoice to draft.
    #[serde(rename = "draft")]
    Draft,
}

/// Body for `POST /invoices/{id}/messages`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateInvoiceMessage {
    /// Who receives the message (at least one).
    pub recipients: Vec<Recipient>,

    /// Subject; Harvest's default when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Body; Harvest's default when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Include a link to the client invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_link_to_client_invoice: Option<bool>,

    /// Attach the invoice PDF.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_pdf: Option<bool>,

    /// Copy the sender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_me_a_copy: Option<bool>,

    /// Send as a thank-you note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thank_you: Option<bool>,
}

impl CreateInvoiceMessage {
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

/// Fails unless `recipients` is non-empty and every email is set.
pub(crate) fn validate_recipients(recipients: &[Recipient]) -> Result<(), HarvestError> {
    if recipients.is_empty() {
        return Err(HarvestError::validation("at least one recipient is required"));
    }
    for recipient in recipients {
        require_text("recipient email", &recipient.email)?;
    }
    Ok(())
}

/// Body for `POST /invoices/{id}/payments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateInvoicePayment {
    /// Amount paid (required, positive).
    pub amount: f64,

    /// When the payment was made (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,

    /// Date the payment was made (YYYY-MM-DD); alternative to `paid_at`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<String>,

    /// Notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CreateInvoicePayment {
    /// A payment of `amount`.
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            ..Self::default()
        }
    }

    /// Rejects zero, negative, or non-finite amounts.
    pub fn validate(&self) -> Result<(), HarvestError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(HarvestError::validation(format!(
                "payment amount must be positive, got {}",
                self.amount
            )));
        }
        Ok(())
    }
}
