//! Expense, receipt, and expense category inputs.

use std::path::Path;

use serde::Serialize;

use super::{require_id, require_text};
use crate::error::HarvestError;

/// A receipt file uploaded with an expense as a multipart `receipt` part.
#[derive(Clone, PartialEq)]
pub struct ReceiptFile {
    /// File name reported to Harvest.
    pub file_name: String,

    /// MIME type, e.g. `image/png`.
    pub content_type: String,

    /// File contents.
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ReceiptFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReceiptFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ReceiptFile {
    /// A receipt from in-memory bytes.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a receipt from disk, guessing the MIME type from the extension.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Io` if the file cannot be read and
    /// `HarvestError::Validation` if the path has no file name.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, HarvestError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                HarvestError::validation(format!("receipt path has no file name: {}", path.display()))
            })?
            .to_string();

        let bytes = tokio::fs::read(path).await?;
        let content_type = Self::guess_content_type(&file_name).to_string();

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    fn guess_content_type(file_name: &str) -> &'static str {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "pdf" => "application/pdf",
            _ => "application/octet-stream",
        }
    }
}

/// Body for `POST /expenses`.
///
/// When `receipt` is set the request is sent as `multipart/form-data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateExpense {
    /// User the expense belongs to; defaults to the authenticated user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    /// Project (required).
    pub project_id: u64,

    /// Category (required).
    pub expense_category_id: u64,

    /// Date incurred (required, YYYY-MM-DD).
    pub spent_date: String,

    /// Quantity, for unit-based categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<f64>,

    /// Total amount, for amount-based categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,

    /// Notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Whether the expense is billable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,

    /// Receipt to attach.
    #[serde(skip)]
    pub receipt: Option<ReceiptFile>,
}

impl CreateExpense {
    /// An expense on `project_id` in `expense_category_id` for `spent_date`.
    pub fn new(project_id: u64, expense_category_id: u64, spent_date: impl Into<String>) -> Self {
        Self {
            project_id,
            expense_category_id,
            spent_date: spent_date.into(),
            ..Self::default()
        }
    }

    /// Checks required fields.
    pub fn validate(&self) -> Result<(), HarvestError> {
        require_id("project_id", self.project_id)?;
        require_id("expense_category_id", self.expense_category_id)?;
        require_text("spent_date", &self.spent_date)
    }
}

/// Body for `PATCH /expenses/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateExpense {
    /// Move to another project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    /// Move to another category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_category_id: Option<u64>,

    /// New date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent_date: Option<String>,

    /// New quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<f64>,

    /// New total amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,

    /// New notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Billable flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,

    /// Remove the current receipt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_receipt: Option<bool>,

    /// Replacement receipt.
    #[serde(skip)]
    pub receipt: Option<ReceiptFile>,
}

/// Body for `POST /expense_categories`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateExpenseCategory {
    /// Category name (required).
    pub name: String,

    /// Unit name, e.g. `mile`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,

    /// Price per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,

    /// Whether the category is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl CreateExpenseCategory {
    /// A category with the given name.
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

/// Body for `PATCH /expense_categories/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateExpenseCategory {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New unit name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,

    /// New unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,

    /// Archive or restore.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
