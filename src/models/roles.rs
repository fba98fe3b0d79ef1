//! Roles.

use serde::{Deserialize, Serialize};

use crate::pagination::paged_list;

/// A role grouping users, e.g. `Designer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Unique role id.
    pub id: u64,

    /// Role name.
    pub name: String,

    /// Users holding this role.
    #[serde(default)]
    pub user_ids: Vec<u64>,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

paged_list!(
    /// A page of roles.
    Roles,
    roles: Role
);
