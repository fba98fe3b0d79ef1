//! Invoices, invoice line items, messages, payments, and item categories.
//!
//! Line items have no endpoint of their own: they are added, changed, and
//! removed by PATCHing the parent invoice with a `line_items` array.

use super::HarvestClient;
use crate::error::HarvestError;
use crate::inputs::{
    CreateInvoice, CreateInvoiceMessage, CreateInvoicePayment, EventBody, InvoiceEvent,
    ItemCategoryInput, LineItemInput, LineItemsPatch, UpdateInvoice,
};
use crate::models::{
    Invoice, InvoiceItemCategories, InvoiceItemCategory, InvoiceMessage, InvoiceMessages,
    InvoicePayment, InvoicePayments, Invoices,
};
use crate::pagination::ListParams;

/// Checks that every line is new (no `id`).
pub(super) fn ensure_new_lines(line_items: &[LineItemInput]) -> Result<(), HarvestError> {
    if line_items.iter().any(|item| item.id.is_some()) {
        return Err(HarvestError::validation(
            "new line items must not carry an id",
        ));
    }
    Ok(())
}

/// Builds `{"id": n, "_destroy": true}` entries for `line_item_ids`.
pub(super) fn destroy_lines(line_item_ids: &[u64]) -> Vec<LineItemInput> {
    line_item_ids
        .iter()
        .map(|id| LineItemInput::destroy(*id))
        .collect()
}

impl HarvestClient {
    /// Lists invoices. Supports `client_id`, `project_id`, `updated_since`,
    /// `from`, `to` and `state`.
    pub async fn invoices(&self, params: &ListParams) -> Result<Invoices, HarvestError> {
        self.list("/invoices", params).await
    }

    /// Retrieves an invoice with its line items.
    pub async fn get_invoice(&self, invoice_id: u64) -> Result<Invoice, HarvestError> {
        self.get(&format!("/invoices/{}", invoice_id), &[]).await
    }

    /// Creates a free-form invoice.
    pub async fn create_invoice(&self, input: &CreateInvoice) -> Result<Invoice, HarvestError> {
        input.validate()?;
        ensure_new_lines(&input.line_items)?;
        self.post("/invoices", &Self::to_body(input)?).await
    }

    /// Updates an invoice's header fields.
    pub async fn update_invoice(
        &self,
        invoice_id: u64,
        input: &UpdateInvoice,
    ) -> Result<Invoice, HarvestError> {
        let body = Self::update_body(input)?;
        self.patch(&format!("/invoices/{}", invoice_id), &body).await
    }

    /// Appends line items to an invoice.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Validation` if `line_items` is empty, or if any
    /// item has an `id` or lacks a `kind`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let invoice = client
    ///     .create_invoice_line_items(
    ///         13150453,
    ///         &[LineItemInput::new("Service", 1000.0).description("DEF Project")],
    ///     )
    ///     .await?;
    /// ```
    pub async fn create_invoice_line_items(
        &self,
        invoice_id: u64,
        line_items: &[LineItemInput],
    ) -> Result<Invoice, HarvestError> {
        ensure_new_lines(line_items)?;
        self.patch_line_items(&format!("/invoices/{}", invoice_id), line_items)
            .await
    }

    /// Changes one existing line item; `line_item.id` selects the line.
    pub async fn update_invoice_line_item(
        &self,
        invoice_id: u64,
        line_item: &LineItemInput,
    ) -> Result<Invoice, HarvestError> {
        if line_item.id.is_none() || line_item.is_destroy() {
            return Err(HarvestError::validation(
                "line item updates need the id of an existing line",
            ));
        }
        self.patch_line_items(
            &format!("/invoices/{}", invoice_id),
            std::slice::from_ref(line_item),
        )
        .await
    }

    /// Removes line items from an invoice.
    pub async fn delete_invoice_line_items(
        &self,
        invoice_id: u64,
        line_item_ids: &[u64],
    ) -> Result<Invoice, HarvestError> {
        self.patch_line_items(
            &format!("/invoices/{}", invoice_id),
            &destroy_lines(line_item_ids),
        )
        .await
    }

    /// Deletes an invoice.
    pub async fn delete_invoice(&self, invoice_id: u64) -> Result<(), HarvestError> {
        self.delete(&format!("/invoices/{}", invoice_id)).await
    }

    /// Lists the messages sent for an invoice, including recorded state changes.
    pub async fn invoice_messages(
        &self,
        invoice_id: u64,
        params: &ListParams,
    ) -> Result<InvoiceMessages, HarvestError> {
        self.list(&format!("/invoices/{}/messages", invoice_id), params)
            .await
    }

    /// Sends an invoice message. Sending a draft invoice marks it as sent.
    pub async fn create_invoice_message(
        &self,
        invoice_id: u64,
        input: &CreateInvoiceMessage,
    ) -> Result<InvoiceMessage, HarvestError> {
        input.validate()?;
        let path = format!("/invoices/{}/messages", invoice_id);
        self.post(&path, &Self::to_body(input)?).await
    }

    /// Deletes an invoice message.
    pub async fn delete_invoice_message(
        &self,
        invoice_id: u64,
        message_id: u64,
    ) -> Result<(), HarvestError> {
        self.delete(&format!("/invoices/{}/messages/{}", invoice_id, message_id))
            .await
    }

    /// Records a state change on an invoice without emailing anyone.
    ///
    /// `event` marks the invoice as sent, closed, re-opened, or draft.
    pub async fn mark_draft_invoice(
        &self,
        invoice_id: u64,
        event: InvoiceEvent,
    ) -> Result<InvoiceMessage, HarvestError> {
        let path = format!("/invoices/{}/messages", invoice_id);
        let body = Self::to_body(&EventBody { event_type: event })?;
        self.post(&path, &body).await
    }

    /// Lists the payments recorded against an invoice.
    pub async fn invoice_payments(
        &self,
        invoice_id: u64,
        params: &ListParams,
    ) -> Result<InvoicePayments, HarvestError> {
        self.list(&format!("/invoices/{}/payments", invoice_id), params)
            .await
    }

    /// Records a payment against an invoice.
    pub async fn create_invoice_payment(
        &self,
        invoice_id: u64,
        input: &CreateInvoicePayment,
    ) -> Result<InvoicePayment, HarvestError> {
        input.validate()?;
        let path = format!("/invoices/{}/payments", invoice_id);
        self.post(&path, &Self::to_body(input)?).await
    }

    /// Deletes a payment.
    pub async fn delete_invoice_payment(
        &self,
        invoice_id: u64,
        payment_id: u64,
    ) -> Result<(), HarvestError> {
        self.delete(&format!("/invoices/{}/payments/{}", invoice_id, payment_id))
            .await
    }

    /// Lists invoice item categories.
    pub async fn invoice_item_categories(
        &self,
        params: &ListParams,
    ) -> Result<InvoiceItemCategories, HarvestError> {
        self.list("/invoice_item_categories", params).await
    }

    /// Retrieves an invoice item category.
    pub async fn get_invoice_item_category(
        &self,
        category_id: u64,
    ) -> Result<InvoiceItemCategory, HarvestError> {
        self.get(&format!("/invoice_item_categories/{}", category_id), &[])
            .await
    }

    /// Creates an invoice item category.
    pub async fn create_invoice_item_category(
        &self,
        input: &ItemCategoryInput,
    ) -> Result<InvoiceItemCategory, HarvestError> {
        input.validate()?;
        self.post("/invoice_item_categories", &Self::to_body(input)?)
            .await
    }

    /// Renames an invoice item category.
    pub async fn update_invoice_item_category(
        &self,
        category_id: u64,
        input: &ItemCategoryInput,
    ) -> Result<InvoiceItemCategory, HarvestError> {
        input.validate()?;
        let path = format!("/invoice_item_categories/{}", category_id);
        self.patch(&path, &Self::to_body(input)?).await
    }

    /// Deletes an invoice item category. Built-in categories cannot be deleted.
    pub async fn delete_invoice_item_category(&self, category_id: u64) -> Result<(), HarvestError> {
        self.delete(&format!("/invoice_item_categories/{}", category_id))
            .await
    }

    /// PATCHes `{"line_items": [...]}` onto an invoice or estimate.
    pub(super) async fn patch_line_items<T>(
        &self,
        path: &str,
        line_items: &[LineItemInput],
    ) -> Result<T, HarvestError>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = Self::to_body(&LineItemsPatch::new(line_items)?)?;
        self.patch(path, &body).await
    }
}
