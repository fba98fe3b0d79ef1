//! # Harvest
//!
//! A typed async client for the Harvest time tracking and invoicing API v2.
//!
//! ## Features
//!
//! - **Authentication**: personal access tokens and both OAuth2 grants
//!   (implicit and authorization code)
//! - **Resources**: clients, contacts, projects, assignments, tasks, roles,
//!   users, rates, time entries, expenses, invoices, estimates, and their
//!   messages, payments, and item categories
//! - **Pagination**: every list call returns one typed page;
//!   [`collect_all`](pagination::collect_all) walks the rest
//! - **Error handling**: automatic retry for transient failures with exponential backoff
//! - **Security**: tokens are never logged or exposed in error messages
//!
//! ## Architecture
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`auth`] - Credentials and the OAuth2 grant helpers
//! - [`error`] - Error types with token redaction
//! - [`harvest_client`] - HTTP client and all resource operations
//! - [`pagination`] - Page envelope and list query parameters
//! - [`models`] - Records decoded from Harvest responses
//! - [`inputs`] - Create and update request bodies
//!
//! ## Configuration
//!
//! [`Config::from_env`](config::Config::from_env) reads:
//!
//! - `HARVEST_ACCOUNT_ID`: numeric account id
//! - `HARVEST_ACCESS_TOKEN`: personal access token
//!
//! Optional:
//! - `HARVEST_BASE_URL`: API base URL (defaults to `https://api.harvestapp.com/api/v2`)
//! - `HARVEST_USER_AGENT`: `User-Agent` header value
//! - `HARVEST_PUT_AUTH_IN_HEADER`: `false` sends credentials as query parameters
//! - `RUST_LOG`: Log level for the binary (e.g., `harvest=debug`)
//!
//! ## Example
//!
//! ```ignore
//! use harvest::config::Config;
//! use harvest::harvest_client::HarvestClient;
//! use harvest::inputs::CreateTimeEntryDuration;
//! use harvest::pagination::ListParams;
//!
//! async fn example() -> Result<(), harvest::error::HarvestError> {
//!     let config = Config::from_env()?;
//!     let client = HarvestClient::new(&config)?;
//!
//!     let projects = client.projects(&ListParams::new().is_active(true)).await?;
//!     for project in &projects.projects {
//!         println!("{}: {}", project.id, project.name);
//!     }
//!
//!     let entry = CreateTimeEntryDuration {
//!         hours: Some(1.5),
//!         ..CreateTimeEntryDuration::new(14307913, 8083365, "2017-03-21")
//!     };
//!     client.create_time_entry_via_duration(&entry).await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![recursion_limit = "256"]

pub mod auth;
pub mod config;
pub mod error;
pub mod harvest_client;
pub mod inputs;
pub mod models;
pub mod pagination;

pub use auth::{AuthPlacement, Credentials};
pub use config::Config;
pub use error::HarvestError;
pub use harvest_client::HarvestClient;
pub use pagination::ListParams;
