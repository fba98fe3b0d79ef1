//! Configuration for the Harvest client.
//!
//! A [`Config`] is either loaded from environment variables (personal access
//! token setups) or built directly from [`Credentials`] obtained through one
//! of the OAuth2 grants.

use std::env;

use url::Url;

use crate::auth::{AuthPlacement, Credentials};
use crate::error::HarvestError;

/// Default Harvest API v2 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.harvestapp.com/api/v2";

/// Configuration for connecting to Harvest.
#[derive(Clone, Debug)]
pub struct Config {
    /// API base URL (e.g., `https://api.harvestapp.com/api/v2`).
    pub base_url: String,

    /// `User-Agent` header value; Harvest asks for an app name and contact.
    pub user_agent: String,

    /// How requests are authenticated.
    pub credentials: Credentials,

    /// Whether credentials travel in headers or in the query string.
    pub auth_placement: AuthPlacement,
}

impl Config {
    /// Creates a configuration from explicit credentials.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Config` if `base_url` is not an http(s) URL.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Result<Self, HarvestError> {
        Ok(Config {
            base_url: Self::validate_base_url(base_url.into())?,
            user_agent: Self::default_user_agent(),
            credentials,
            auth_placement: AuthPlacement::Header,
        })
    }

    /// Overrides the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sends `access_token` and `account_id` as query parameters instead of
    /// the `Authorization` and `Harvest-Account-Id` headers.
    pub fn with_auth_in_query(mut self) -> Self {
        self.auth_placement = AuthPlacement::Query;
        self
    }

    /// Loads a personal access token configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `HARVEST_ACCOUNT_ID`: numeric account id
    /// - `HARVEST_ACCESS_TOKEN`: personal access token (`Bearer ` prefix optional)
    ///
    /// # Optional Environment Variables
    ///
    /// - `HARVEST_BASE_URL`: defaults to [`DEFAULT_BASE_URL`]
    /// - `HARVEST_USER_AGENT`: defaults to `harvest-api/<version>`
    /// - `HARVEST_PUT_AUTH_IN_HEADER`: `false` sends credentials as query
    ///   parameters (defaults to `true`)
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Config` if any required variable is missing
    /// or if values fail validation.
    pub fn from_env() -> Result<Self, HarvestError> {
        let account_id = Self::get_required_env("HARVEST_ACCOUNT_ID")?;
        let token = Self::get_required_env("HARVEST_ACCESS_TOKEN")?;

        let account_id = Self::validate_account_id(&account_id)?;
        Self::validate_token(&token)?;

        let base_url = Self::get_optional_env("HARVEST_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut config = Config::new(base_url, Credentials::personal(account_id, token))?;
        if let Some(user_agent) = Self::get_optional_env("HARVEST_USER_AGENT") {
            config.user_agent = user_agent;
        }
        if let Some(in_header) = Self::get_optional_env("HARVEST_PUT_AUTH_IN_HEADER") {
            if !Self::parse_flag("HARVEST_PUT_AUTH_IN_HEADER", &in_header)? {
                config = config.with_auth_in_query();
            }
        }

        Ok(config)
    }

    fn default_user_agent() -> String {
        format!("harvest-api/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, HarvestError> {
        Self::get_optional_env(name).ok_or_else(|| HarvestError::missing_env(name))
    }

    fn get_optional_env(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }

    /// Validates and normalizes the base URL.
    fn validate_base_url(url: String) -> Result<String, HarvestError> {
        let url = url.trim().trim_end_matches('/').to_string();

        let parsed = Url::parse(&url).map_err(|e| {
            HarvestError::invalid_config(format!("HARVEST_BASE_URL is not a valid URL: {}", e))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(HarvestError::invalid_config(
                "HARVEST_BASE_URL must start with http:// or https://",
            ));
        }

        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(HarvestError::invalid_config("HARVEST_BASE_URL must include a host"));
        }

        Ok(url)
    }

    fn parse_flag(name: &str, value: &str) -> Result<bool, HarvestError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(HarvestError::invalid_config(format!(
                "{} must be true or false",
                name
            ))),
        }
    }

    fn validate_account_id(value: &str) -> Result<u64, HarvestError> {
        value.trim().parse().map_err(|_| {
            HarvestError::invalid_config("HARVEST_ACCOUNT_ID must be a numeric account id")
        })
    }

    /// Rejects obvious placeholder tokens copied from sample configs.
    fn validate_token(token: &str) -> Result<(), HarvestError> {
        let token_lower = token.to_lowercase();
        let placeholder_patterns = [
            "personal_access_token",
            "your_token",
            "placeholder",
            "somebunchoflettersandnumbers",
            "changeme",
        ];

        for pattern in placeholder_patterns {
            if token_lower.contains(pattern) {
                return Err(HarvestError::invalid_config(
                    "HARVEST_ACCESS_TOKEN appears to be a placeholder value",
                ));
            }
        }

        Ok(())
    }
}
