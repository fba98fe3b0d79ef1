//! Error types for the Harvest client.
//!
//! This module defines `HarvestError`, the unified error type returned by
//! every client operation.
//!
//! # Security
//!
//! Error messages built from server responses are passed through
//! `sanitize_message()` so that access tokens never end up in logs or
//! returned errors.

use std::time::Duration;
use thiserror::Error;

/// Unified error type for all Harvest operations.
#[derive(Error, Debug)]
pub enum HarvestError {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP response returned a non-success status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The error message extracted from the response body.
        body: String,
    },

    /// Request timed out.
    #[error("request timed out after {duration:?} - Harvest may be slow or unreachable")]
    Timeout {
        /// How long we waited before timing out.
        duration: Duration,
        /// The operation that timed out.
        operation: String,
    },

    /// Rate limited by Harvest (HTTP 429).
    #[error("rate limited by Harvest - please wait before retrying")]
    RateLimited {
        /// Delay from the `Retry-After` header, if present.
        retry_after: Option<Duration>,
    },

    /// Harvest temporarily unavailable (HTTP 502/503/504).
    #[error("service temporarily unavailable ({status}) - will retry automatically")]
    ServiceUnavailable {
        /// The specific status code.
        status: reqwest::StatusCode,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// Description of the missing resource (e.g. `client 5735776`).
        resource: String,
    },

    /// Authentication failed - invalid token or account id.
    #[error("authentication failed - check HARVEST_ACCESS_TOKEN and HARVEST_ACCOUNT_ID")]
    Authentication,

    /// Input validation failed before any request was sent.
    #[error("validation error: {0}")]
    Validation(String),

    /// An OAuth2 grant step failed.
    #[error("OAuth2 error: {message}")]
    OAuth {
        /// What went wrong during the grant.
        message: String,
    },

    /// Reading a local file (expense receipt) failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection test failed.
    #[error("connection test failed: {message}")]
    ConnectionTest {
        /// Details about why the connection test failed.
        message: String,
    },
}

impl HarvestError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        HarvestError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        HarvestError::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        HarvestError::Validation(message.into())
    }

    /// Creates a not found error for a resource description.
    pub fn not_found(resource: impl Into<String>) -> Self {
        HarvestError::NotFound {
            resource: resource.into(),
        }
    }

    /// Creates a timeout error.
    pub fn timeout(duration: Duration, operation: impl Into<String>) -> Self {
        HarvestError::Timeout {
            duration,
            operation: operation.into(),
        }
    }

    /// Creates an OAuth2 error.
    pub fn oauth(message: impl Into<String>) -> Self {
        HarvestError::OAuth {
            message: message.into(),
        }
    }

    /// Creates a connection test error.
    pub fn connection_test(message: impl Into<String>) -> Self {
        HarvestError::ConnectionTest {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient and the operation should be retried.
    ///
    /// Retryable errors include:
    /// - Rate limiting (HTTP 429)
    /// - Service unavailable (HTTP 502, 503, 504)
    /// - Timeouts and connection failures
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            HarvestError::RateLimited { .. } => true,
            HarvestError::ServiceUnavailable { .. } => true,
            HarvestError::Timeout { .. } => true,
            HarvestError::Http(e) => e.is_timeout() || e.is_connect(),
            HarvestError::HttpStatus { status, .. } => {
                status.as_u16() == 429 || status.is_server_error()
            }
            _ => false,
        }
    }

    /// Returns true if this is a rate limit error, indicating we should back off.
    #[must_use]
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, HarvestError::RateLimited { .. })
            || matches!(self, HarvestError::HttpStatus { status, .. } if status.as_u16() == 429)
    }

    /// Returns the suggested delay before retry, if any.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            HarvestError::RateLimited { retry_after } => *retry_after,
            HarvestError::ServiceUnavailable { .. } => Some(Duration::from_millis(500)),
            HarvestError::Timeout { .. } => Some(Duration::from_millis(100)),
            _ => None,
        }
    }

    /// Replaces every occurrence of `secret` in `message` with `[REDACTED]`.
    #[must_use]
    pub fn sanitize_message(message: &str, secret: &str) -> String {
        if secret.is_empty() {
            return message.to_string();
        }
        message.replace(secret, "[REDACTED]")
    }

    /// Display message of this error with `secret` redacted.
    #[must_use]
    pub fn sanitized_display(&self, secret: &str) -> String {
        Self::sanitize_message(&self.to_string(), secret)
    }
}
