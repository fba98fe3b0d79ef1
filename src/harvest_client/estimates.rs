//! Estimates, estimate line items, messages, and item categories.

use super::invoices::{destroy_lines, ensure_new_lines};
use super::HarvestClient;
use crate::error::HarvestError;
use crate::inputs::{
    CreateEstimate, CreateEstimateMessage, EstimateEvent, EventBody, ItemCategoryInput,
    LineItemInput, UpdateEstimate,
};
use crate::models::{
    Estimate, EstimateItemCategories, EstimateItemCategory, EstimateMessage, EstimateMessages,
    Estimates,
};
use crate::pagination::ListParams;

impl HarvestClient {
    /// Lists estimates. Supports `client_id`, `updated_since`, `from`, `to` and `state`.
    pub async fn estimates(&self, params: &ListParams) -> Result<Estimates, HarvestError> {
        self.list("/estimates", params).await
    }

    /// Retrieves an estimate with its line items.
    pub async fn get_estimate(&self, estimate_id: u64) -> Result<Estimate, HarvestError> {
        self.get(&format!("/estimates/{}", estimate_id), &[]).await
    }

    /// Creates an estimate.
    pub async fn create_estimate(&self, input: &CreateEstimate) -> Result<Estimate, HarvestError> {
        input.validate()?;
        ensure_new_lines(&input.line_items)?;
        self.post("/estimates", &Self::to_body(input)?).await
    }

    /// Updates an estimate's header fields.
    pub async fn update_estimate(
        &self,
        estimate_id: u64,
        input: &UpdateEstimate,
    ) -> Result<Estimate, HarvestError> {
        let body = Self::update_body(input)?;
        self.patch(&format!("/estimates/{}", estimate_id), &body).await
    }

    /// Appends line items to an estimate.
    pub async fn create_estimate_line_items(
        &self,
        estimate_id: u64,
        line_items: &[LineItemInput],
    ) -> Result<Estimate, HarvestError> {
        ensure_new_lines(line_items)?;
        self.patch_line_items(&format!("/estimates/{}", estimate_id), line_items)
            .await
    }

    /// Removes line items from an estimate.
    pub async fn delete_estimate_line_items(
        &self,
        estimate_id: u64,
        line_item_ids: &[u64],
    ) -> Result<Estimate, HarvestError> {
        self.patch_line_items(
            &format!("/estimates/{}", estimate_id),
            &destroy_lines(line_item_ids),
        )
        .await
    }

    /// Deletes an estimate.
    pub async fn delete_estimate(&self, estimate_id: u64) -> Result<(), HarvestError> {
        self.delete(&format!("/estimates/{}", estimate_id)).await
    }

    /// Lists the messages sent for an estimate.
    pub async fn estimate_messages(
        &self,
        estimate_id: u64,
        params: &ListParams,
    ) -> Result<EstimateMessages, HarvestError> {
        self.list(&format!("/estimates/{}/messages", estimate_id), params)
            .await
    }

    /// Sends an estimate message.
    pub async fn create_estimate_message(
        &self,
        estimate_id: u64,
        input: &CreateEstimateMessage,
    ) -> Result<EstimateMessage, HarvestError> {
        input.validate()?;
        let path = format!("/estimates/{}/messages", estimate_id);
        self.post(&path, &Self::to_body(input)?).await
    }

    /// Records a state change on an estimate: sent, accepted, declined, or re-opened.
    pub async fn mark_draft_estimate(
        &self,
        estimate_id: u64,
        event: EstimateEvent,
    ) -> Result<EstimateMessage, HarvestError> {
        let path = format!("/estimates/{}/messages", estimate_id);
        let body = Self::to_body(&EventBody { event_type: event })?;
        self.post(&path, &body).await
    }

    /// Lists estimate item categories.
    pub async fn estimate_item_categories(
        &self,
        params: &ListParams,
    ) -> Result<EstimateItemCategories, HarvestError> {
        self.list("/estimate_item_categories", params).await
    }

    /// Retrieves an estimate item category.
    pub async fn get_estimate_item_category(
        &self,
        category_id: u64,
    ) -> Result<EstimateItemCategory, HarvestError> {
        self.get(&format!("/estimate_item_categories/{}", category_id), &[])
            .await
    }

    /// Creates an estimate item category.
    pub async fn create_estimate_item_category(
        &self,
        input: &ItemCategoryInput,
    ) -> Result<EstimateItemCategory, HarvestError> {
        input.validate()?;
        self.post("/estimate_item_categories", &Self::to_body(input)?)
            .await
    }

    /// Renames an estimate item category.
    pub async fn update_estimate_item_category(
        &self,
        category_id: u64,
        input: &ItemCategoryInput,
    ) -> Result<EstimateItemCategory, HarvestError> {
        input.validate()?;
        let path = format!("/estimate_item_categories/{}", category_id);
        self.patch(&path, &Self::to_body(input)?).await
    }

    /// Deletes an estimate item category.
    pub async fn delete_estimate_item_category(
        &self,
        category_id: u64,
    ) -> Result<(), HarvestError> {
        self.delete(&format!("/estimate_item_categories/{}", category_id))
            .await
    }
}
