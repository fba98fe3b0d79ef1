//! Expenses and expense categories.

use serde::{Deserialize, Serialize};

use super::{ClientRef, InvoiceRef, ProjectRef, UserAssignment, UserRef};
use crate::pagination::paged_list;

/// An uploaded expense receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Download URL.
    pub url: String,

    /// Original file name.
    pub file_name: String,

    /// Size in bytes.
    #[serde(default)]
    pub file_size: Option<u64>,

    /// MIME type.
    #[serde(default)]
    pub content_type: Option<String>,
}

/// An expense category as referenced from an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCategoryRef {
    /// Category id.
    pub id: u64,

    /// Category name.
    pub name: String,

    /// Price per unit, for unit-based categories.
    #[serde(default)]
    pub unit_price: Option<f64>,

    /// Unit name, e.g. `mile`.
    #[serde(default)]
    pub unit_name: Option<String>,
}

/// An expense recorded against a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique expense id.
    pub id: u64,

    /// The project's client.
    pub client: ClientRef,

    /// The project.
    pub project: ProjectRef,

    /// The category.
    pub expense_category: ExpenseCategoryRef,

    /// Who incurred the expense.
    pub user: UserRef,

    /// The user's assignment on the project.
    pub user_assignment: UserAssignment,

    /// Attached receipt, if any.
    #[serde(default)]
    pub receipt: Option<Receipt>,

    /// The invoice the expense was billed on, if any.
    #[serde(default)]
    pub invoice: Option<InvoiceRef>,

    /// Notes.
    #[serde(default)]
    pub notes: Option<String>,

    /// Quantity, for unit-based categories.
    #[serde(default)]
    pub units: Option<f64>,

    /// Total amount.
    pub total_cost: f64,

    /// Whether the expense is billable.
    pub billable: bool,

    /// Whether the expense was approved.
    pub is_closed: bool,

    /// Whether the expense is locked (approved or invoiced).
    pub is_locked: bool,

    /// Whether the expense was invoiced.
    pub is_billed: bool,

    /// Why the expense is locked.
    #[serde(default)]
    pub locked_reason: Option<String>,

    /// Date the expense occurred (YYYY-MM-DD).
    pub spent_date: String,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

/// A category expenses are filed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    /// Unique category id.
    pub id: u64,

    /// Category name.
    pub name: String,

    /// Unit name, e.g. `mile`.
    #[serde(default)]
    pub unit_name: Option<String>,

    /// Price per unit.
    #[serde(default)]
    pub unit_price: Option<f64>,

    /// Whether the category is active or archived.
    pub is_active: bool,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

paged_list!(
    /// A page of expenses.
    Expenses,
    expenses: Expense
);

paged_list!(
    /// A page of expense categories.
    ExpenseCategories,
    expense_categories: ExpenseCategory
);
