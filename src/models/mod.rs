//! Data models for the Harvest API v2.
//!
//! Records are decoded from Harvest's JSON responses. Unknown fields are
//! ignored and nullable fields are `Option`s. Every list endpoint has a
//! page type (`Clients`, `TimeEntries`, ...) holding the records plus the
//! flattened [`Pagination`](crate::pagination::Pagination) envelope.

mod clients;
mod common;
mod company;
mod estimates;
mod expenses;
mod invoices;
mod projects;
mod roles;
mod tasks;
mod time_entries;
mod users;

pub use clients::*;
pub use common::*;
pub use company::*;
pub use estimates::*;
pub use expenses::*;
pub use invoices::*;
pub use projects::*;
pub use roles::*;
pub use tasks::*;
pub use time_entries::*;
pub use users::*;
