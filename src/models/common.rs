//! Reference types embedded in other Harvest records.
//!
//! Harvest nests short `{id, name}` objects wherever a record points at
//! another one (the client of a project, the user of a time entry, ...).

use serde::{Deserialize, Serialize};

/// A client as referenced from another record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRef {
    /// Client id.
    pub id: u64,

    /// Client name.
    pub name: String,

    /// Client currency, included on projects and expenses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// A project as referenced from another record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    /// Project id.
    pub id: u64,

    /// Project name.
    pub name: String,

    /// Project code, when one is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// A user or task: anything referenced by id and name only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    /// Referenced record id.
    pub id: u64,

    /// Display name.
    pub name: String,
}

/// A user as referenced from another record.
pub type UserRef = NamedRef;

/// A task as referenced from another record.
pub type TaskRef = NamedRef;

/// The user who created an invoice or estimate.
pub type Creator = NamedRef;

/// An invoice as referenced from a time entry or expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRef {
    /// Invoice id.
    pub id: u64,

    /// Invoice number.
    pub number: String,
}

/// An estimate or retainer referenced from an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdRef {
    /// Referenced record id.
    pub id: u64,
}

/// A message recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    /// Recipient name.
    #[serde(default)]
    pub name: Option<String>,

    /// Recipient email address.
    pub email: String,
}

impl Recipient {
    /// Creates a recipient with a display name.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: email.into(),
        }
    }
}

/// An invoice or estimate line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Line item id.
    pub id: u64,

    /// Project the item is billed against (invoices only).
    #[serde(default)]
    pub project: Option<ProjectRef>,

    /// Item category name, e.g. `Service` or `Product`.
    pub kind: String,

    /// Text shown on the document.
    #[serde(default)]
    pub description: Option<String>,

    /// Number of units.
    #[serde(default)]
    pub quantity: f64,

    /// Price per unit.
    #[serde(default)]
    pub unit_price: f64,

    /// `quantity * unit_price`.
    #[serde(default)]
    pub amount: f64,

    /// Whether the first tax applies.
    #[serde(default)]
    pub taxed: bool,

    /// Whether the second tax applies.
    #[serde(default)]
    pub taxed2: bool,
}
