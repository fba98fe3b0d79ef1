//! Clients and client contacts.

use super::HarvestClient;
use crate::error::HarvestError;
use crate::inputs::{CreateClient, CreateClientContact, UpdateClient, UpdateClientContact};
use crate::models::{Client, ClientContact, ClientContacts, Clients};
use crate::pagination::ListParams;

impl HarvestClient {
    /// Lists clients, newest first.
    ///
    /// Supports `is_active`, `updated_since`, `page` and `per_page`.
    pub async fn clients(&self, params: &ListParams) -> Result<Clients, HarvestError> {
        self.list("/clients", params).await
    }

    /// Retrieves a client.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::NotFound` if the client doesn't exist.
    pub async fn get_client(&self, client_id: u64) -> Result<Client, HarvestError> {
        self.get(&format!("/clients/{}", client_id), &[]).await
    }

    /// Creates a client.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let client = harvest
    ///     .create_client(&CreateClient::new("Your New Client"))
    ///     .await?;
    /// ```
    pub async fn create_client(&self, input: &CreateClient) -> Result<Client, HarvestError> {
        input.validate()?;
        self.post("/clients", &Self::to_body(input)?).await
    }

    /// Updates a client; unset fields are left unchanged.
    pub async fn update_client(
        &self,
        client_id: u64,
        input: &UpdateClient,
    ) -> Result<Client, HarvestError> {
        let body = Self::update_body(input)?;
        self.patch(&format!("/clients/{}", client_id), &body).await
    }

    /// Deletes a client. Harvest refuses when the client has projects or invoices.
    pub async fn delete_client(&self, client_id: u64) -> Result<(), HarvestError> {
        self.delete(&format!("/clients/{}", client_id)).await
    }

    /// Lists client contacts. Supports `client_id` and `updated_since`.
    pub async fn client_contacts(&self, params: &ListParams) -> Result<ClientContacts, HarvestError> {
        self.list("/contacts", params).await
    }

    /// Retrieves a client contact.
    pub async fn get_client_contact(&self, contact_id: u64) -> Result<ClientContact, HarvestError> {
        self.get(&format!("/contacts/{}", contact_id), &[]).await
    }

    /// Creates a client contact.
    pub async fn create_client_contact(
        &self,
        input: &CreateClientContact,
    ) -> Result<ClientContact, HarvestError> {
        input.validate()?;
        self.post("/contacts", &Self::to_body(input)?).await
    }

    /// Updates a client contact.
    pub async fn update_client_contact(
        &self,
        contact_id: u64,
        input: &UpdateClientContact,
    ) -> Result<ClientContact, HarvestError> {
        let body = Self::update_body(input)?;
        self.patch(&format!("/contacts/{}", contact_id), &body).await
    }

    /// Deletes a client contact.
    pub async fn delete_client_contact(&self, contact_id: u64) -> Result<(), HarvestError> {
        self.delete(&format!("/contacts/{}", contact_id)).await
    }
}
