//! HTTP client for the Harvest API v2.
//!
//! This module provides the `HarvestClient` struct for making authenticated
//! requests to Harvest. Resource operations live in one `impl` block per
//! resource family (clients, projects, time entries, ...).
//!
//! # Retry Logic
//!
//! The client automatically retries transient failures:
//! - HTTP 429 (rate limit): `Retry-After` or exponential backoff starting at 100ms
//! - HTTP 502/503/504: retry after 500ms
//! - Timeouts: retry
//!
//! Client errors (4xx except 429) are not retried.
//!
//! # Security
//!
//! The access token is never logged. Error bodies are sanitized before
//! they are returned.

use std::future::Future;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::auth::{AuthPlacement, Credentials};
use crate::config::Config;
use crate::error::HarvestError;
use crate::inputs::ReceiptFile;
use crate::models::Company;
use crate::pagination::ListParams;

mod clients;
mod estimates;
mod expenses;
mod invoices;
mod projects;
mod tasks;
mod time_entries;
mod users;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum number of attempts for transient failures.
const MAX_RETRY_ATTEMPTS: u32 = 3;

/// Initial delay for exponential backoff (milliseconds).
const INITIAL_BACKOFF_MS: u64 = 100;

/// Delay before retrying after a gateway error (milliseconds).
const SERVER_ERROR_DELAY_MS: u64 = 500;

/// Maximum length for error messages taken from response bodies.
const MAX_ERROR_BODY_LEN: usize = 500;

/// Harvest error bodies: `{"error", "error_description"}` or `{"message"}`.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// What a request carries besides headers and query.
#[derive(Clone, Copy)]
enum Payload<'a> {
    Empty,
    Json(&'a serde_json::Value),
    Multipart {
        fields: &'a serde_json::Value,
        receipt: &'a ReceiptFile,
    },
}

/// HTTP client for the Harvest API.
///
/// Handles authentication headers, request formatting, retries, and
/// response decoding for every resource.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = HarvestClient::new(&config)?;
///
/// let clients = client.clients(&ListParams::new().is_active(true)).await?;
/// ```
#[derive(Clone)]
pub struct HarvestClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL (e.g., `https://api.harvestapp.com/api/v2`).
    base_url: String,

    /// `User-Agent` header value.
    user_agent: String,

    /// SECURITY: Never log the token inside!
    credentials: Credentials,

    /// Headers or query parameters.
    auth_placement: AuthPlacement,
}

impl std::fmt::Debug for HarvestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HarvestClient")
            .field("base_url", &self.base_url)
            .field("account_id", &self.credentials.account_id())
            .finish_non_exhaustive()
    }
}

impl HarvestClient {
    /// Creates a new Harvest client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, HarvestError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(HarvestError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            credentials: config.credentials.clone(),
            auth_placement: config.auth_placement,
        })
    }

    /// The account every request is scoped to.
    pub fn account_id(&self) -> u64 {
        self.credentials.account_id()
    }

    /// The API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn token(&self) -> &str {
        self.credentials.bearer_token()
    }

    /// Tests connectivity to Harvest.
    ///
    /// Fetches the company record to verify the server is reachable and the
    /// token and account id are accepted.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::ConnectionTest` if the connection fails,
    /// with details about the failure reason.
    pub async fn test_connection(&self) -> Result<Company, HarvestError> {
        tracing::debug!("Testing connection to Harvest");

        match self.company().await {
            Ok(company) => {
                tracing::info!(company = %company.name, "Connection test successful");
                Ok(company)
            }
            Err(HarvestError::Authentication) => Err(HarvestError::connection_test(
                "Authentication failed - verify HARVEST_ACCESS_TOKEN and HARVEST_ACCOUNT_ID",
            )),
            Err(HarvestError::Timeout { duration, .. }) => {
                Err(HarvestError::connection_test(format!(
                    "Connection timed out after {:?} - verify HARVEST_BASE_URL is correct and reachable",
                    duration
                )))
            }
            Err(HarvestError::Http(e)) => {
                let message = HarvestError::sanitize_message(&e.to_string(), self.token());
                Err(HarvestError::connection_test(format!(
                    "HTTP error: {} - verify HARVEST_BASE_URL is correct",
                    message
                )))
            }
            Err(e) => Err(HarvestError::connection_test(
                e.sanitized_display(self.token()),
            )),
        }
    }

    /// Retrieves the company for the authenticated account.
    pub async fn company(&self) -> Result<Company, HarvestError> {
        self.get("/company", &[]).await
    }

    /// Executes an operation with retry logic for transient failures.
    ///
    /// Retries on:
    /// - HTTP 429 (rate limit) with exponential backoff
    /// - HTTP 502/503/504 with fixed delay
    /// - Timeouts with fixed delay
    ///
    /// Does not retry on client errors (4xx except 429).
    async fn with_retry<T, F, Fut>(&self, operation: &str, f: F) -> Result<T, HarvestError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, HarvestError>>,
    {
        let mut delay = Duration::from_millis(INITIAL_BACKOFF_MS);
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            match f().await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempts < MAX_RETRY_ATTEMPTS => {
                    let actual_delay = if e.is_rate_limit() {
                        e.retry_after().unwrap_or(delay)
                    } else if matches!(e, HarvestError::ServiceUnavailable { .. }) {
                        Duration::from_millis(SERVER_ERROR_DELAY_MS)
                    } else {
                        delay
                    };

                    tracing::debug!(
                        operation = operation,
                        attempt = attempts,
                        max_attempts = MAX_RETRY_ATTEMPTS,
                        delay_ms = actual_delay.as_millis() as u64,
                        error = %e.sanitized_display(self.token()),
                        "Retrying after transient error"
                    );

                    tokio::time::sleep(actual_delay).await;

                    if e.is_rate_limit() {
                        delay *= 2;
                    }
                }
                Err(e) => {
                    if attempts > 1 {
                        tracing::debug!(
                            operation = operation,
                            attempts = attempts,
                            "All retry attempts exhausted"
                        );
                    }
                    return Err(e);
                }
            }
        }
    }

    /// Makes a single request and returns the raw response body.
    ///
    /// This is the low-level request method without retry logic.
    async fn request_inner(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        payload: Payload<'_>,
    ) -> Result<String, HarvestError> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(
            method = %method,
            path = %path,
            "Making Harvest API request"
        );

        let mut req = self
            .http
            .request(method.clone(), &url)
            .header(reqwest::header::USER_AGENT, &self.user_agent);

        req = match self.auth_placement {
            AuthPlacement::Header => req
                .bearer_auth(self.token())
                .header("Harvest-Account-Id", self.account_id().to_string()),
            AuthPlacement::Query => req.query(&[
                ("access_token", self.token().to_string()),
                ("account_id", self.account_id().to_string()),
            ]),
        };

        if !query.is_empty() {
            req = req.query(query);
        }

        req = match payload {
            Payload::Empty => req,
            Payload::Json(body) => req.json(body),
            Payload::Multipart { fields, receipt } => req.multipart(Self::multipart_form(fields, receipt)?),
        };

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                return HarvestError::timeout(
                    Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                    format!("{} {}", method, path),
                );
            }
            HarvestError::Http(self.scrub_url(e))
        })?;
        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_http_error(status, path, response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| HarvestError::Http(self.scrub_url(e)))?;

        tracing::trace!(body = %body, "Harvest API response");

        Ok(body)
    }

    /// Drops the request URL from transport errors when it carries the token.
    fn scrub_url(&self, error: reqwest::Error) -> reqwest::Error {
        match self.auth_placement {
            AuthPlacement::Header => error,
            AuthPlacement::Query => error.without_url(),
        }
    }

    /// Makes a request with automatic retry for transient failures.
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        payload: Payload<'_>,
    ) -> Result<String, HarvestError> {
        let operation = format!("{} {}", method, path);
        self.with_retry(&operation, || {
            self.request_inner(method.clone(), path, query, payload)
        })
        .await
    }

    /// Builds the multipart form for a request carrying a receipt.
    ///
    /// Every JSON field becomes a text part; the receipt is the `receipt` part.
    fn multipart_form(
        fields: &serde_json::Value,
        receipt: &ReceiptFile,
    ) -> Result<Form, HarvestError> {
        let mut form = Form::new();

        if let Some(fields) = fields.as_object() {
            for (name, value) in fields {
                let text = match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                form = form.text(name.clone(), text);
            }
        }

        let part = Part::bytes(receipt.bytes.clone())
            .file_name(receipt.file_name.clone())
            .mime_str(&receipt.content_type)
            .map_err(|_| {
                HarvestError::validation(format!(
                    "invalid receipt content type: {}",
                    receipt.content_type
                ))
            })?;

        Ok(form.part("receipt", part))
    }

    /// Handles HTTP-level errors and converts to HarvestError.
    ///
    /// Classifies errors into specific types for proper retry handling.
    async fn handle_http_error(
        &self,
        status: StatusCode,
        path: &str,
        response: reqwest::Response,
    ) -> HarvestError {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        let body = response.text().await.unwrap_or_default();
        let body = HarvestError::sanitize_message(&Self::error_message(&body), self.token());
        let body = Self::truncate(body);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::debug!(status = %status, message = %body, "Harvest rejected credentials");
                HarvestError::Authentication
            }
            StatusCode::NOT_FOUND => HarvestError::not_found(path),
            StatusCode::TOO_MANY_REQUESTS => {
                tracing::warn!(retry_after = ?retry_after, "Rate limited by Harvest");
                HarvestError::RateLimited { retry_after }
            }
            StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => {
                tracing::warn!(status = %status, "Harvest temporarily unavailable");
                HarvestError::ServiceUnavailable { status }
            }
            _ => HarvestError::HttpStatus { status, body },
        }
    }

    /// Pulls the human-readable message out of a Harvest error body.
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                error_description: Some(description),
                ..
            }) => description,
            Ok(ErrorBody {
                message: Some(message),
                ..
            }) => message,
            Ok(ErrorBody {
                error: Some(error), ..
            }) => error,
            _ => body.trim().to_string(),
        }
    }

    fn truncate(body: String) -> String {
        if body.len() <= MAX_ERROR_BODY_LEN {
            return body;
        }
        let mut end = MAX_ERROR_BODY_LEN;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, HarvestError> {
        serde_json::from_str(body).map_err(HarvestError::Serialization)
    }

    fn to_body<B: Serialize>(input: &B) -> Result<serde_json::Value, HarvestError> {
        serde_json::to_value(input).map_err(HarvestError::Serialization)
    }

    /// Serializes an update body, rejecting updates that change nothing.
    fn update_body<B: Serialize>(input: &B) -> Result<serde_json::Value, HarvestError> {
        let body = Self::to_body(input)?;
        if body.as_object().is_some_and(|fields| fields.is_empty()) {
            return Err(HarvestError::validation(
                "at least one field must be set to update",
            ));
        }
        Ok(body)
    }

    // ========================================================================
    // Private helper methods for HTTP verbs
    // ========================================================================

    /// Makes a GET request.
    async fn get<T>(&self, path: &str, query: &[(&'static str, String)]) -> Result<T, HarvestError>
    where
        T: DeserializeOwned,
    {
        let body = self.request(Method::GET, path, query, Payload::Empty).await?;
        Self::decode(&body)
    }

    /// Makes a GET request for one page of a list endpoint.
    async fn list<T>(&self, path: &str, params: &ListParams) -> Result<T, HarvestError>
    where
        T: DeserializeOwned,
    {
        let query = params.to_query()?;
        self.get(path, &query).await
    }

    /// Makes a POST request with a JSON body.
    async fn post<T>(&self, path: &str, body: &serde_json::Value) -> Result<T, HarvestError>
    where
        T: DeserializeOwned,
    {
        let body = self.request(Method::POST, path, &[], Payload::Json(body)).await?;
        Self::decode(&body)
    }

    /// Makes a PATCH request with a JSON body.
    async fn patch<T>(&self, path: &str, body: &serde_json::Value) -> Result<T, HarvestError>
    where
        T: DeserializeOwned,
    {
        let body = self.request(Method::PATCH, path, &[], Payload::Json(body)).await?;
        Self::decode(&body)
    }

    /// Makes a PATCH request without a body.
    async fn patch_empty<T>(&self, path: &str) -> Result<T, HarvestError>
    where
        T: DeserializeOwned,
    {
        let body = self.request(Method::PATCH, path, &[], Payload::Empty).await?;
        Self::decode(&body)
    }

    /// Sends JSON fields, switching to multipart when a receipt is attached.
    async fn send_with_receipt<T>(
        &self,
        method: Method,
        path: &str,
        fields: &serde_json::Value,
        receipt: Option<&ReceiptFile>,
    ) -> Result<T, HarvestError>
    where
        T: DeserializeOwned,
    {
        let payload = match receipt {
            Some(receipt) => Payload::Multipart { fields, receipt },
            None => Payload::Json(fields),
        };
        let body = self.request(method, path, &[], payload).await?;
        Self::decode(&body)
    }

    /// Makes a DELETE request; the response body is ignored.
    async fn delete(&self, path: &str) -> Result<(), HarvestError> {
        self.request(Method::DELETE, path, &[], Payload::Empty).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Creates a HarvestClient for unit tests without requiring env vars.
    fn test_client() -> HarvestClient {
        HarvestClient {
            http: Client::new(),
            base_url: "https://example.com/api/v2".to_string(),
            user_agent: "test".to_string(),
            credentials: Credentials::personal(1234567, "test_token"),
            auth_placement: AuthPlacement::Header,
        }
    }

    #[test]
    fn test_error_message_prefers_description() {
        let body = r#"{"error":"invalid_token","error_description":"The access token provided is expired, revoked, malformed or invalid for other reasons."}"#;
        assert_eq!(
            HarvestClient::error_message(body),
            "The access token provided is expired, revoked, malformed or invalid for other reasons."
        );
    }

    #[test]
    fn test_error_message_variants() {
        assert_eq!(
            HarvestClient::error_message(r#"{"message":"Name has already been taken"}"#),
            "Name has already been taken"
        );
        assert_eq!(HarvestClient::error_message(r#"{"error":"forbidden"}"#), "forbidden");
        assert_eq!(HarvestClient::error_message(" plain text "), "plain text");
    }

    #[test]
    fn test_truncate_long_bodies() {
        let long = "é".repeat(400);
        let truncated = HarvestClient::truncate(long);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() <= MAX_ERROR_BODY_LEN + "...[truncated]".len());

        assert_eq!(HarvestClient::truncate("short".to_string()), "short");
    }

    #[test]
    fn test_update_body_rejects_empty() {
        let empty = crate::inputs::UpdateClient::default();
        assert!(matches!(
            HarvestClient::update_body(&empty),
            Err(HarvestError::Validation(_))
        ));

        let named = crate::inputs::UpdateClient {
            name: Some("New".to_string()),
            ..Default::default()
        };
        assert!(HarvestClient::update_body(&named).is_ok());
    }

    #[test]
    fn test_multipart_form_accepts_fields() {
        let fields = serde_json::json!({"notes": "Dinner", "total_cost": 13.59});
        let receipt = ReceiptFile::new("dinner_receipt.gif", "image/gif", vec![1, 2, 3]);
        assert!(HarvestClient::multipart_form(&fields, &receipt).is_ok());

        let bad = ReceiptFile::new("r", "not a mime type", vec![]);
        assert!(HarvestClient::multipart_form(&fields, &bad).is_err());
    }

    #[tokio::test]
    async fn test_with_retry_retries_timeouts() {
        let client = test_client();
        let counter = AtomicU32::new(0);
        let calls = &counter;

        let result = client
            .with_retry("GET /company", || async move {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(HarvestError::timeout(Duration::from_secs(30), "GET /company"))
                } else {
                    Ok("ok")
                }
            })
            .await;

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_with_retry_gives_up_on_repeated_timeouts() {
        let client = test_client();
        let counter = AtomicU32::new(0);
        let calls = &counter;

        let result: Result<(), _> = client
            .with_retry("GET /company", || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(HarvestError::timeout(Duration::from_secs(30), "GET /company"))
            })
            .await;

        assert!(matches!(result, Err(HarvestError::Timeout { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), MAX_RETRY_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_with_retry_does_not_retry_validation() {
        let client = test_client();
        let counter = AtomicU32::new(0);
        let calls = &counter;

        let result: Result<(), _> = client
            .with_retry("POST /clients", || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(HarvestError::validation("name is required"))
            })
            .await;

        assert!(matches!(result, Err(HarvestError::Validation(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_debug_hides_token() {
        let client = test_client();
        let debug = format!("{:?}", client);
        assert!(debug.contains("1234567"));
        assert!(!debug.contains("test_token"));
    }
}
