//! Expenses and expense categories.

use reqwest::Method;

use super::HarvestClient;
use crate::error::HarvestError;
use crate::inputs::{CreateExpense, CreateExpenseCategory, UpdateExpense, UpdateExpenseCategory};
use crate::models::{ExpenseCategories, ExpenseCategory, Expense, Expenses};
use crate::pagination::ListParams;

impl HarvestClient {
    /// Lists expenses. Supports `user_id`, `client_id`, `project_id`,
    /// `is_billed`, `updated_since`, `from` and `to`.
    pub async fn expenses(&self, params: &ListParams) -> Result<Expenses, HarvestError> {
        self.list("/expenses", params).await
    }

    /// Retrieves an expense.
    pub async fn get_expense(&self, expense_id: u64) -> Result<Expense, HarvestError> {
        self.get(&format!("/expenses/{}", expense_id), &[]).await
    }

    /// Creates an expense.
    ///
    /// With a receipt attached the body is sent as `multipart/form-data`;
    /// otherwise as JSON.
    pub async fn create_expense(&self, input: &CreateExpense) -> Result<Expense, HarvestError> {
        input.validate()?;
        let fields = Self::to_body(input)?;
        self.send_with_receipt(Method::POST, "/expenses", &fields, input.receipt.as_ref())
            .await
    }

    /// Updates an expense, optionally replacing its receipt.
    pub async fn update_expense(
        &self,
        expense_id: u64,
        input: &UpdateExpense,
    ) -> Result<Expense, HarvestError> {
        let fields = match input.receipt {
            Some(_) => Self::to_body(input)?,
            None => Self::update_body(input)?,
        };
        let path = format!("/expenses/{}", expense_id);
        self.send_with_receipt(Method::PATCH, &path, &fields, input.receipt.as_ref())
            .await
    }

    /// Deletes an expense. Locked expenses cannot be deleted.
    pub async fn delete_expense(&self, expense_id: u64) -> Result<(), HarvestError> {
        self.delete(&format!("/expenses/{}", expense_id)).await
    }

    /// Lists expense categories.
    pub async fn expense_categories(
        &self,
        params: &ListParams,
    ) -> Result<ExpenseCategories, HarvestError> {
        self.list("/expense_categories", params).await
    }

    /// Retrieves an expense category.
    pub async fn get_expense_category(
        &self,
        expense_category_id: u64,
    ) -> Result<ExpenseCategory, HarvestError> {
        self.get(&format!("/expense_categories/{}", expense_category_id), &[])
            .await
    }

    /// Creates an expense category.
    pub async fn create_expense_category(
        &self,
        input: &CreateExpenseCategory,
    ) -> Result<ExpenseCategory, HarvestError> {
        input.validate()?;
        self.post("/expense_categories", &Self::to_body(input)?).await
    }

    /// Updates an expense category.
    pub async fn update_expense_category(
        &self,
        expense_category_id: u64,
        input: &UpdateExpenseCategory,
    ) -> Result<ExpenseCategory, HarvestError> {
        let body = Self::update_body(input)?;
        self.patch(&format!("/expense_categories/{}", expense_category_id), &body)
            .await
    }

    /// Deletes an expense category that has no expenses.
    pub async fn delete_expense_category(
        &self,
        expense_category_id: u64,
    ) -> Result<(), HarvestError> {
        self.delete(&format!("/expense_categories/{}", expense_category_id))
            .await
    }
}
