//! Estimates, their messages, and estimate item categories.

use serde::{Deserialize, Serialize};

use super::{ClientRef, Creator, LineItem, Recipient};
use crate::pagination::paged_list;

/// A quote sent to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Unique estimate id.
    pub id: u64,

    /// Key used to build the client-facing estimate URL.
    pub client_key: String,

    /// Estimate number.
    pub number: String,

    /// Purchase order number.
    #[serde(default)]
    pub purchase_order: Option<String>,

    /// Total amount, including taxes and discounts.
    pub amount: f64,

    /// First tax rate, in percent.
    #[serde(default)]
    pub tax: Option<f64>,

    /// First tax amount.
    #[serde(default)]
    pub tax_amount: f64,

    /// Second tax rate, in percent.
    #[serde(default)]
    pub tax2: Option<f64>,

    /// Second tax amount.
    #[serde(default)]
    pub tax2_amount: f64,

    /// Discount rate, in percent.
    #[serde(default)]
    pub discount: Option<f64>,

    /// Discount amount.
    #[serde(default)]
    pub discount_amount: f64,

    /// Subject line.
    #[serde(default)]
    pub subject: Option<String>,

    /// Notes shown on the estimate.
    #[serde(default)]
    pub notes: Option<String>,

    /// `draft`, `sent`, `accepted` or `declined`.
    pub state: String,

    /// Issue date (YYYY-MM-DD).
    #[serde(default)]
    pub issue_date: Option<String>,

    /// When the estimate was sent.
    #[serde(default)]
    pub sent_at: Option<String>,

    /// When the client accepted.
    #[serde(default)]
    pub accepted_at: Option<String>,

    /// When the client declined.
    #[serde(default)]
    pub declined_at: Option<String>,

    /// Currency code.
    pub currency: String,

    /// The quoted client.
    pub client: ClientRef,

    /// Who created the estimate.
    #[serde(default)]
    pub creator: Option<Creator>,

    /// Estimate lines.
    #[serde(default)]
    pub line_items: Vec<LineItem>,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

/// A message sent for an estimate, or a recorded state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateMessage {
    /// Unique message id.
    pub id: u64,

    /// Name of the user who created the message.
    pub sent_by: String,

    /// Email of the user who created the message.
    pub sent_by_email: String,

    /// Name the message was sent from.
    pub sent_from: String,

    /// Email the message was sent from.
    pub sent_from_email: String,

    /// Recipients.
    #[serde(default)]
    pub recipients: Vec<Recipient>,

    /// Subject.
    #[serde(default)]
    pub subject: Option<String>,

    /// Body.
    #[serde(default)]
    pub body: Option<String>,

    /// Whether the sender was copied.
    #[serde(default)]
    pub send_me_a_copy: bool,

    /// State change recorded by this message, if any.
    #[serde(default)]
    pub event_type: Option<String>,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

/// A category estimate lines are filed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateItemCategory {
    /// Unique category id.
    pub id: u64,

    /// Category name.
    pub name: String,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

paged_list!(
    /// A page of estimates.
    Estimates,
    estimates: Estimate
);

paged_list!(
    /// A page of estimate messages.
    EstimateMessages,
    estimate_messages: EstimateMessage
);

paged_list!(
    /// A page of estimate item categories.
    EstimateItemCategories,
    estimate_item_categories: EstimateItemCategory
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_line_items_have_no_project() {
        let estimate: Estimate = serde_json::from_value(serde_json::json!({
            "id": 1439818,
            "client_key": "13dc088aa7d51ec687f186b146730c3c75dc7423",
            "number": "1001",
            "purchase_order": "5678",
            "amount": 9630.0,
            "tax": 5.0,
            "tax_amount": 450.0,
            "tax2": 2.0,
            "tax2_amount": 180.0,
            "discount": 10.0,
            "discount_amount": 1000.0,
            "subject": "Online Store - Phase 2",
            "notes": "Some notes about the estimate",
            "state": "sent",
            "issue_date": "2017-06-01",
            "sent_at": "2017-06-27T16:11:33Z",
            "created_at": "2017-06-27T16:11:24Z",
            "updated_at": "2017-06-27T16:13:56Z",
            "accepted_at": null,
            "declined_at": null,
            "currency": "USD",
            "client": {"id": 5735776, "name": "123 Industries"},
            "creator": {"id": 1782884, "name": "Bob Powell"},
            "line_items": [{
                "id": 53334195,
                "kind": "Service",
                "description": "Phase 2 of the Online Store",
                "quantity": 100,
                "unit_price": 100,
                "amount": 10000,
                "taxed": true,
                "taxed2": true
            }]
        }))
        .unwrap();

        assert_eq!(estimate.line_items.len(), 1);
        assert!(estimate.line_items[0].project.is_none());
        assert_eq!(estimate.line_items[0].amount, 10000.0);
    }

    #[test]
    fn test_event_message_without_recipients() {
        let message: EstimateMessage = serde_json::from_value(serde_json::json!({
            "id": 2666246,
            "sent_by": "Bob Powell",
            "sent_by_email": "bobpowell@example.com",
            "sent_from": "Bob Powell",
            "sent_from_email": "bobpowell@example.com",
            "send_me_a_copy": false,
            "created_at": "2017-08-25T21:31:55Z",
            "updated_at": "2017-08-25T21:31:55Z",
            "recipients": [],
            "event_type": "re-open",
            "subject": null,
            "body": null
        }))
        .unwrap();

        assert_eq!(message.event_type.as_deref(), Some("re-open"));
        assert!(message.recipients.is_empty());
    }
}
