//! Clients and client contacts.

use serde::{Deserialize, Serialize};

use super::ClientRef;
use crate::pagination::paged_list;

/// A client: the party projects and invoices belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique client id.
    pub id: u64,

    /// Client name.
    pub name: String,

    /// Whether the client is active or archived.
    pub is_active: bool,

    /// Physical address, may span several lines.
    #[serde(default)]
    pub address: Option<String>,

    /// Key used to build the client's statement URL.
    #[serde(default)]
    pub statement_key: Option<String>,

    /// ISO 4217 currency code used for invoices and estimates.
    pub currency: String,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

/// A contact person at a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientContact {
    /// Unique contact id.
    pub id: u64,

    /// The client the contact works for.
    pub client: ClientRef,

    /// Job title.
    #[serde(default)]
    pub title: Option<String>,

    /// First name.
    pub first_name: String,

    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,

    /// Email address.
    #[serde(default)]
    pub email: Option<String>,

    /// Office phone number.
    #[serde(default)]
    pub phone_office: Option<String>,

    /// Mobile phone number.
    #[serde(default)]
    pub phone_mobile: Option<String>,

    /// Fax number.
    #[serde(default)]
    pub fax: Option<String>,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

impl ClientContact {
    /// Full name, falling back to the first name alone.
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

paged_list!(
    /// A page of clients.
    Clients,
    clients: Client
);

paged_list!(
    /// A page of client contacts.
    ClientContacts,
    contacts: ClientContact
);
