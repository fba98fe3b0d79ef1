//! Request bodies for create and update calls.
//!
//! Optional fields left as `None` are omitted from the JSON body, so an
//! update only touches the fields that are set. Create inputs carry a
//! `validate()` that rejects empty required values before any request is
//! sent.

use serde::Serialize;

use crate::error::HarvestError;

mod clients;
mod estimates;
mod expenses;
mod invoices;
mod projects;
mod tasks;
mod time_entries;
mod users;

pub use clients::*;
pub use estimates::*;
pub use expenses::*;
pub use invoices::*;
pub use projects::*;
pub use tasks::*;
pub use time_entries::*;
pub use users::*;

/// Fails with a validation error if `value` is blank.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), HarvestError> {
    if value.trim().is_empty() {
        return Err(HarvestError::validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Fails with a validation error if `value` is the unset id `0`.
pub(crate) fn require_id(field: &str, value: u64) -> Result<(), HarvestError> {
    if value == 0 {
        return Err(HarvestError::validation(format!("{} is required", field)));
    }
    Ok(())
}

/// A line item to add to, change on, or remove from an invoice or estimate.
///
/// Line items are edited by PATCHing the parent document with a
/// `line_items` array. Items with an `id` update that line; items without
/// one are appended; [`LineItemInput::destroy`] removes a line.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineItemInput {
    /// Existing line to change or remove.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Project the line bills (invoices only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    /// Item category name, e.g. `Service`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Text shown on the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number of units (Harvest defaults to 1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    /// Price per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,

    /// Whether the first tax applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxed: Option<bool>,

    /// Whether the second tax applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxed2: Option<bool>,

    /// Removes the line `id` when `true`.
    #[serde(rename = "_destroy", skip_serializing_if = "Option::is_none")]
    pub destroy: Option<bool>,
}

impl LineItemInput {
    /// A new line of the given kind and unit price.
    pub fn new(kind: impl Into<String>, unit_price: f64) -> Self {
        Self {
            kind: Some(kind.into()),
            unit_price: Some(unit_price),
            ..Self::default()
        }
    }

    /// Changes to the existing line `id`.
    pub fn update(id: u64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Removes the existing line `id` (`{"id": id, "_destroy": true}`).
    pub fn destroy(id: u64) -> Self {
        Self {
            id: Some(id),
            destroy: Some(true),
            ..Self::default()
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the quantity.
    pub fn quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the unit price.
    pub fn unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    /// Sets the billed project.
    pub fn project_id(mut self, project_id: u64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Returns true if this input removes a line.
    pub fn is_destroy(&self) -> bool {
        self.destroy == Some(true)
    }

    /// Checks that new lines name a kind and existing lines name an id.
    pub fn validate(&self) -> Result<(), HarvestError> {
        match (self.id, &self.kind) {
            (Some(id), _) => require_id("line item id", id),
            (None, Some(kind)) => require_text("line item kind", kind),
            (None, None) => Err(HarvestError::validation(
                "new line items need a kind; existing ones need an id",
            )),
        }
    }
}

/// The `line_items` wrapper PATCHed onto an invoice or estimate.
#[derive(Debug, Serialize)]
pub(crate) struct LineItemsPatch<'a> {
    pub line_items: &'a [LineItemInput],
}

impl<'a> LineItemsPatch<'a> {
    pub fn new(line_items: &'a [LineItemInput]) -> Result<Self, HarvestError> {
        if line_items.is_empty() {
            return Err(HarvestError::validation("at least one line item is required"));
        }
        for item in line_items {
            item.validate()?;
        }
        Ok(Self { line_items })
    }
}

/// Body for a mark-as event on an invoice or estimate.
#[derive(Debug, Serialize)]
pub(crate) struct EventBody<E: Serialize> {
    pub event_type: E,
}

/// Name of an invoice or estimate item category (the only writable field).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemCategoryInput {
    /// Category name.
    pub name: String,
}

impl ItemCategoryInput {
    /// A category with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Checks that the name is not blank.
    pub fn validate(&self) -> Result<(), HarvestError> {
        require_text("name", &self.name)
    }
}
