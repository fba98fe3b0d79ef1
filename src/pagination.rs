//! Pagination for Harvest list endpoints.
//!
//! Every list response shares one envelope:
//!
//! ```json
//! {
//!   "clients": [ ... ],
//!   "per_page": 100, "total_pages": 1, "total_entries": 2,
//!   "next_page": null, "previous_page": null, "page": 1,
//!   "links": { "first": "...", "next": null, "previous": null, "last": "..." }
//! }
//! ```
//!
//! List calls fetch exactly one page. [`collect_all`] follows `next_page`
//! when every record is wanted.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::HarvestError;

/// Page requested when none is set.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size requested when none is set.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Largest page size Harvest accepts.
pub const MAX_PER_PAGE: u32 = 2000;

/// Navigation links returned with every page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    /// Link to the first page.
    #[serde(default)]
    pub first: Option<String>,

    /// Link to the next page, if any.
    #[serde(default)]
    pub next: Option<String>,

    /// Link to the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,

    /// Link to the last page.
    #[serde(default)]
    pub last: Option<String>,
}

/// The pagination envelope shared by all list responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    /// Records per page.
    #[serde(default)]
    pub per_page: u32,

    /// Number of pages available.
    #[serde(default)]
    pub total_pages: u32,

    /// Number of records across all pages.
    #[serde(default)]
    pub total_entries: u32,

    /// Next page number, `None` on the last page.
    #[serde(default)]
    pub next_page: Option<u32>,

    /// Previous page number, `None` on the first page.
    #[serde(default)]
    pub previous_page: Option<u32>,

    /// This page's number (1-based).
    #[serde(default)]
    pub page: u32,

    /// Navigation links.
    #[serde(default)]
    pub links: Links,
}

impl Pagination {
    /// Returns true if more pages follow this one.
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }
}

/// A single page of a list response.
pub trait Paged {
    /// Record type on the page.
    type Item;

    /// The page envelope.
    fn pagination(&self) -> &Pagination;

    /// Consumes the page, returning its records.
    fn into_items(self) -> Vec<Self::Item>;
}

/// Defines a list response type: the records plus a flattened [`Pagination`].
macro_rules! paged_list {
    ($(#[$meta:meta])* $name:ident, $field:ident: $item:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            /// Records on this page.
            #[serde(default)]
            pub $field: Vec<$item>,

            /// Page envelope.
            #[serde(flatten)]
            pub pagination: $crate::pagination::Pagination,
        }

        impl $crate::pagination::Paged for $name {
            type Item = $item;

            fn pagination(&self) -> &$crate::pagination::Pagination {
                &self.pagination
            }

            fn into_items(self) -> Vec<$item> {
                self.$field
            }
        }
    };
}

pub(crate) use paged_list;

/// Fetches every page starting from `params`, concatenating the records.
///
/// `fetch` is called once per page with `params` advanced to that page.
///
/// # Example
///
/// ```ignore
/// let all = collect_all(ListParams::new().is_active(true), |p| async move {
///     client.clients(&p).await
/// })
/// .await?;
/// ```
pub async fn collect_all<P, F, Fut>(
    params: ListParams,
    mut fetch: F,
) -> Result<Vec<P::Item>, HarvestError>
where
    P: Paged,
    F: FnMut(ListParams) -> Fut,
    Fut: Future<Output = Result<P, HarvestError>>,
{
    let mut params = params;
    let mut items = Vec::new();

    loop {
        let requested = params.page.unwrap_or(DEFAULT_PAGE);
        let page = fetch(params.clone()).await?;
        let next = page.pagination().next_page;
        items.extend(page.into_items());

        match next {
            Some(next) if next > requested => {
                tracing::debug!(page = next, "Fetching next page");
                params = params.page(next);
            }
            Some(next) => {
                tracing::warn!(
                    requested,
                    next,
                    "next_page does not advance, stopping pagination"
                );
                break;
            }
            None => break,
        }
    }

    Ok(items)
}

/// Query parameters for list endpoints.
///
/// Harvest ignores filters an endpoint does not support, so one builder
/// serves every resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    /// Page number (1-based).
    pub page: Option<u32>,

    /// Records per page.
    pub per_page: Option<u32>,

    /// Only active (or inactive) records.
    pub is_active: Option<bool>,

    /// Only records updated since this ISO 8601 timestamp.
    pub updated_since: Option<String>,

    /// Only records for this client.
    pub client_id: Option<u64>,

    /// Only records for this project.
    pub project_id: Option<u64>,

    /// Only records for this user.
    pub user_id: Option<u64>,

    /// Only records for this task.
    pub task_id: Option<u64>,

    /// Only billed (or unbilled) records.
    pub is_billed: Option<bool>,

    /// Only running (or stopped) time entries.
    pub is_running: Option<bool>,

    /// Only records on or after this date (YYYY-MM-DD).
    pub from: Option<String>,

    /// Only records on or before this date (YYYY-MM-DD).
    pub to: Option<String>,

    /// Only invoices/estimates in this state (e.g. `draft`, `open`).
    pub state: Option<String>,
}

impl ListParams {
    /// Creates empty list parameters (first page, 100 records).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Filters on the active flag.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Filters to records updated since a timestamp.
    pub fn updated_since(mut self, timestamp: impl Into<String>) -> Self {
        self.updated_since = Some(timestamp.into());
        self
    }

    /// Filters by client.
    pub fn client_id(mut self, client_id: u64) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Filters by project.
    pub fn project_id(mut self, project_id: u64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Filters by user.
    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Filters by task.
    pub fn task_id(mut self, task_id: u64) -> Self {
        self.task_id = Some(task_id);
        self
    }

    /// Filters on the billed flag.
    pub fn is_billed(mut self, is_billed: bool) -> Self {
        self.is_billed = Some(is_billed);
        self
    }

    /// Filters on the running flag.
    pub fn is_running(mut self, is_running: bool) -> Self {
        self.is_running = Some(is_running);
        self
    }

    /// Limits to a date range (inclusive, YYYY-MM-DD).
    pub fn between(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self.to = Some(to.into());
        self
    }

    /// Filters by invoice or estimate state.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Converts to query pairs. `page` and `per_page` are always present.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Validation` for page 0 or a page size outside
    /// `1..=2000`.
    pub fn to_query(&self) -> Result<Vec<(&'static str, String)>, HarvestError> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE);

        if page == 0 {
            return Err(HarvestError::validation("page must be 1 or greater"));
        }
        if !(1..=MAX_PER_PAGE).contains(&per_page) {
            return Err(HarvestError::validation(format!(
                "per_page must be between 1 and {}, got {}",
                MAX_PER_PAGE, per_page
            )));
        }

        let mut query = vec![("page", page.to_string()), ("per_page", per_page.to_string())];

        let flags = [
            ("is_active", self.is_active),
            ("is_billed", self.is_billed),
            ("is_running", self.is_running),
        ];
        for (key, value) in flags {
            if let Some(value) = value {
                query.push((key, value.to_string()));
            }
        }

        let ids = [
            ("client_id", self.client_id),
            ("project_id", self.project_id),
            ("user_id", self.user_id),
            ("task_id", self.task_id),
        ];
        for (key, value) in ids {
            if let Some(value) = value {
                query.push((key, value.to_string()));
            }
        }

        let text = [
            ("updated_since", &self.updated_since),
            ("from", &self.from),
            ("to", &self.to),
            ("state", &self.state),
        ];
        for (key, value) in text {
            if let Some(value) = value {
                query.push((key, value.clone()));
            }
        }

        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    paged_list!(
        /// Test list.
        Numbers,
        numbers: u32
    );

    fn page(numbers: Vec<u32>, page: u32, next_page: Option<u32>) -> Numbers {
        Numbers {
            numbers,
            pagination: Pagination {
                per_page: 2,
                total_pages: 2,
                total_entries: 3,
                next_page,
                previous_page: None,
                page,
                links: Links::default(),
            },
        }
    }

    #[test]
    fn test_default_query_has_page_and_per_page() {
        let query = ListParams::new().to_query().unwrap();
        assert_eq!(
            query,
            vec![("page", "1".to_string()), ("per_page", "100".to_string())]
        );
    }

    #[test]
    fn test_query_with_filters() {
        let query = ListParams::new()
            .page(2)
            .per_page(50)
            .is_active(true)
            .client_id(5735776)
            .between("2017-03-01", "2017-03-31")
            .to_query()
            .unwrap();

        assert!(query.contains(&("page", "2".to_string())));
        assert!(query.contains(&("per_page", "50".to_string())));
        assert!(query.contains(&("is_active", "true".to_string())));
        assert!(query.contains(&("client_id", "5735776".to_string())));
        assert!(query.contains(&("from", "2017-03-01".to_string())));
        assert!(query.contains(&("to", "2017-03-31".to_string())));
        assert!(!query.iter().any(|(k, _)| *k == "state"));
    }

    #[test]
    fn test_query_rejects_bad_paging() {
        assert!(ListParams::new().page(0).to_query().is_err());
        assert!(ListParams::new().per_page(0).to_query().is_err());
        assert!(ListParams::new().per_page(2001).to_query().is_err());
        assert!(ListParams::new().per_page(2000).to_query().is_ok());
    }

    #[test]
    fn test_pagination_decodes_envelope() {
        let json = serde_json::json!({
            "numbers": [1, 2],
            "per_page": 100,
            "total_pages": 1,
            "total_entries": 2,
            "next_page": null,
            "previous_page": null,
            "page": 1,
            "links": {
                "first": "https://api.harvestapp.com/v2/numbers?page=1&per_page=100",
                "next": null,
                "previous": null,
                "last": "https://api.harvestapp.com/v2/numbers?page=1&per_page=100"
            }
        });
        let numbers: Numbers = serde_json::from_value(json).unwrap();
        assert_eq!(numbers.numbers, vec![1, 2]);
        assert_eq!(numbers.pagination.total_entries, 2);
        assert!(!numbers.pagination.has_next());
    }

    #[tokio::test]
    async fn test_collect_all_follows_next_page() {
        let mut requested = Vec::new();
        let all = collect_all(ListParams::new().per_page(2), |p| {
            requested.push(p.page.unwrap_or(DEFAULT_PAGE));
            let result = match p.page.unwrap_or(DEFAULT_PAGE) {
                1 => Ok(page(vec![1, 2], 1, Some(2))),
                _ => Ok(page(vec![3], 2, None)),
            };
            async move { result }
        })
        .await
        .unwrap();

        assert_eq!(all, vec![1, 2, 3]);
        assert_eq!(requested, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_collect_all_stops_when_next_page_repeats() {
        let all = collect_all(ListParams::new(), |_| async { Ok(page(vec![7], 1, Some(1))) })
            .await
            .unwrap();
        assert_eq!(all, vec![7]);
    }

    #[tokio::test]
    async fn test_collect_all_propagates_errors() {
        let result: Result<Vec<u32>, _> = collect_all(ListParams::new(), |_| async {
            Err::<Numbers, _>(HarvestError::Authentication)
        })
        .await;
        assert!(matches!(result, Err(HarvestError::Authentication)));
    }
}
