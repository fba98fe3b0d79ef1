//! Authentication strategies for the Harvest API.
//!
//! Harvest accepts a bearer token plus a `Harvest-Account-Id` header on every
//! request. The token comes from one of three places:
//!
//! - A personal access token created in Harvest ID
//! - The OAuth2 implicit grant (token delivered in the redirect fragment)
//! - The OAuth2 authorization code grant (code exchanged for a token)
//!
//! The strategy is chosen once, when building a [`Config`](crate::config::Config).
//! Tokens are never refreshed behind the caller's back; use
//! [`AuthorizationCodeGrant::refresh`] explicitly when a token expires.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::HarvestError;

/// Harvest ID authorization endpoint.
pub const DEFAULT_AUTH_URL: &str = "https://id.getharvest.com/oauth2/authorize";

/// Harvest ID token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://id.getharvest.com/api/v2/oauth2/token";

/// Timeout for token endpoint calls.
const TOKEN_TIMEOUT_SECS: u64 = 30;

/// Strips an optional `Bearer ` prefix from a token.
fn strip_bearer(token: &str) -> String {
    let token = token.trim();
    token
        .strip_prefix("Bearer ")
        .or_else(|| token.strip_prefix("bearer "))
        .unwrap_or(token)
        .trim()
        .to_string()
}

/// A personal access token bound to one Harvest account.
#[derive(Clone)]
pub struct PersonalAccessToken {
    /// Numeric Harvest account id.
    pub account_id: u64,

    /// SECURITY: Never log this value!
    token: String,
}

impl PersonalAccessToken {
    /// Creates a token, accepting both `abc` and `Bearer abc` forms.
    pub fn new(account_id: u64, token: impl AsRef<str>) -> Self {
        Self {
            account_id,
            token: strip_bearer(token.as_ref()),
        }
    }

    /// Returns the raw token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonalAccessToken")
            .field("account_id", &self.account_id)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// An OAuth2 access token as returned by Harvest ID.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessToken {
    /// The bearer token.
    pub access_token: String,

    /// Token type, always `bearer` for Harvest.
    #[serde(default = "default_token_type")]
    pub token_type: String,

    /// Lifetime in seconds from issuance.
    #[serde(default, deserialize_with = "deserialize_optional_seconds")]
    pub expires_in: Option<u64>,

    /// Refresh token (authorization code grant only).
    #[serde(default)]
    pub refresh_token: Option<String>,

    /// Space-separated scopes, e.g. `harvest:1234567`.
    #[serde(default)]
    pub scope: Option<String>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Accepts `expires_in` as either a number or a numeric string.
fn deserialize_optional_seconds<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Number(u64),
        Text(String),
    }

    match Option::<Seconds>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Seconds::Number(n)) => Ok(Some(n)),
        Some(Seconds::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl AccessToken {
    /// Lifetime of the token, if Harvest reported one.
    pub fn lifetime(&self) -> Option<Duration> {
        self.expires_in.map(Duration::from_secs)
    }

    /// Harvest account ids granted by this token (`harvest:<id>` scopes).
    pub fn account_ids(&self) -> Vec<u64> {
        self.scope
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .filter_map(|s| s.strip_prefix("harvest:"))
            .filter_map(|id| id.parse().ok())
            .collect()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("scope", &self.scope)
            .finish()
    }
}

/// Where credentials are attached to API requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPlacement {
    /// `Authorization: Bearer` and `Harvest-Account-Id` headers.
    #[default]
    Header,

    /// `access_token` and `account_id` query parameters.
    Query,
}

/// How requests are authenticated.
#[derive(Clone, Debug)]
pub enum Credentials {
    /// A personal access token.
    PersonalAccessToken(PersonalAccessToken),

    /// A token obtained through either OAuth2 grant.
    OAuth2 {
        /// Account the requests are made against.
        account_id: u64,
        /// The token obtained from Harvest ID.
        token: AccessToken,
    },
}

impl Credentials {
    /// Personal access token credentials.
    pub fn personal(account_id: u64, token: impl AsRef<str>) -> Self {
        Credentials::PersonalAccessToken(PersonalAccessToken::new(account_id, token))
    }

    /// OAuth2 credentials using the first account granted in the token scope.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::OAuth` if the scope names no Harvest account.
    pub fn from_oauth_token(token: AccessToken) -> Result<Self, HarvestError> {
        let account_id = token.account_ids().first().copied().ok_or_else(|| {
            HarvestError::oauth("token scope does not grant any harvest account")
        })?;
        Ok(Credentials::OAuth2 { account_id, token })
    }

    /// The `Harvest-Account-Id` header value.
    pub fn account_id(&self) -> u64 {
        match self {
            Credentials::PersonalAccessToken(pat) => pat.account_id,
            Credentials::OAuth2 { account_id, .. } => *account_id,
        }
    }

    /// The bearer token sent in the `Authorization` header.
    pub fn bearer_token(&self) -> &str {
        match self {
            Credentials::PersonalAccessToken(pat) => pat.token(),
            Credentials::OAuth2 { token, .. } => &token.access_token,
        }
    }
}

/// Builds an authorize URL with the common query parameters.
fn authorize_url(
    auth_url: &str,
    client_id: &str,
    response_type: &str,
    state: Option<&str>,
) -> Result<Url, HarvestError> {
    let mut url = Url::parse(auth_url)
        .map_err(|e| HarvestError::invalid_config(format!("invalid auth URL: {}", e)))?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("client_id", client_id);
        query.append_pair("response_type", response_type);
        if let Some(state) = state {
            query.append_pair("state", state);
        }
    }
    Ok(url)
}

/// Parses a redirect URL and checks the OAuth2 `state` and `error` parameters.
///
/// `pairs` are the decoded query or fragment parameters.
fn redirect_params(
    pairs: Vec<(String, String)>,
    expected_state: Option<&str>,
) -> Result<Vec<(String, String)>, HarvestError> {
    let get = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    if let Some(error) = get("error") {
        let description = get("error_description").unwrap_or(error);
        return Err(HarvestError::oauth(format!(
            "authorization denied: {}",
            description
        )));
    }

    if let Some(expected) = expected_state {
        if get("state") != Some(expected) {
            return Err(HarvestError::oauth("state parameter mismatch"));
        }
    }

    Ok(pairs)
}

fn parse_redirect(redirect_url: &str) -> Result<Url, HarvestError> {
    Url::parse(redirect_url)
        .map_err(|e| HarvestError::oauth(format!("invalid redirect URL: {}", e)))
}

/// OAuth2 implicit grant, for clients that cannot keep a secret.
///
/// The user visits [`authorize_url`](Self::authorize_url); Harvest redirects
/// back with the token in the URL fragment.
#[derive(Debug, Clone)]
pub struct ImplicitGrant {
    /// OAuth2 client id registered with Harvest ID.
    pub client_id: String,

    /// Authorization endpoint.
    pub auth_url: String,
}

impl ImplicitGrant {
    /// Creates a grant against the default Harvest ID endpoint.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
        }
    }

    /// Overrides the authorization endpoint.
    pub fn with_auth_url(mut self, auth_url: impl Into<String>) -> Self {
        self.auth_url = auth_url.into();
        self
    }

    /// URL to send the user to (`response_type=token`).
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Config` if `auth_url` is not a valid URL.
    pub fn authorize_url(&self, state: Option<&str>) -> Result<Url, HarvestError> {
        authorize_url(&self.auth_url, &self.client_id, "token", state)
    }

    /// Extracts the access token from the URL Harvest redirected to.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::OAuth` if the user denied access, the state
    /// does not match, or no token is present.
    pub fn token_from_redirect(
        &self,
        redirect_url: &str,
        expected_state: Option<&str>,
    ) -> Result<AccessToken, HarvestError> {
        let url = parse_redirect(redirect_url)?;
        let fragment = url.fragment().unwrap_or_default();
        let pairs = url::form_urlencoded::parse(fragment.as_bytes())
            .into_owned()
            .collect();
        let pairs = redirect_params(pairs, expected_state)?;

        let mut token = AccessToken {
            access_token: String::new(),
            token_type: default_token_type(),
            expires_in: None,
            refresh_token: None,
            scope: None,
        };
        for (key, value) in pairs {
            match key.as_str() {
                "access_token" => token.access_token = value,
                "token_type" => token.token_type = value,
                "expires_in" => token.expires_in = value.parse().ok(),
                "scope" => token.scope = Some(value),
                _ => {}
            }
        }

        if token.access_token.is_empty() {
            return Err(HarvestError::oauth(
                "redirect fragment does not contain an access_token",
            ));
        }

        Ok(token)
    }
}

/// Error body returned by the Harvest ID token endpoint.
#[derive(Debug, Deserialize)]
struct TokenErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// OAuth2 authorization code grant, for server-side applications.
#[derive(Clone)]
pub struct AuthorizationCodeGrant {
    /// OAuth2 client id registered with Harvest ID.
    pub client_id: String,

    /// SECURITY: Never log this value!
    client_secret: String,

    /// Authorization endpoint.
    pub auth_url: String,

    /// Token endpoint.
    pub token_url: String,

    http: Client,
}

impl fmt::Debug for AuthorizationCodeGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizationCodeGrant")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("auth_url", &self.auth_url)
            .field("token_url", &self.token_url)
            .finish()
    }
}

impl AuthorizationCodeGrant {
    /// Creates a grant against the default Harvest ID endpoints.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, HarvestError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(TOKEN_TIMEOUT_SECS))
            .build()
            .map_err(HarvestError::HttpClient)?;

        Ok(Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            http,
        })
    }

    /// Overrides the authorization endpoint.
    pub fn with_auth_url(mut self, auth_url: impl Into<String>) -> Self {
        self.auth_url = auth_url.into();
        self
    }

    /// Overrides the token endpoint.
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// URL to send the user to (`response_type=code`).
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Config` if `auth_url` is not a valid URL.
    pub fn authorize_url(&self, state: Option<&str>) -> Result<Url, HarvestError> {
        authorize_url(&self.auth_url, &self.client_id, "code", state)
    }

    /// Extracts the authorization code from the URL Harvest redirected to.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::OAuth` if the user denied access, the state
    /// does not match, or no code is present.
    pub fn code_from_redirect(
        &self,
        redirect_url: &str,
        expected_state: Option<&str>,
    ) -> Result<String, HarvestError> {
        let url = parse_redirect(redirect_url)?;
        let pairs = url.query_pairs().into_owned().collect();
        redirect_params(pairs, expected_state)?
            .into_iter()
            .find(|(k, _)| k == "code")
            .map(|(_, v)| v)
            .filter(|code| !code.is_empty())
            .ok_or_else(|| HarvestError::oauth("redirect URL does not contain a code"))
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::OAuth` if Harvest ID rejects the code.
    pub async fn exchange_code(&self, code: &str) -> Result<AccessToken, HarvestError> {
        tracing::debug!(token_url = %self.token_url, "Exchanging authorization code");
        self.token_request(&[
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .await
    }

    /// Trades a refresh token for a new access token.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::OAuth` if Harvest ID rejects the refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AccessToken, HarvestError> {
        tracing::debug!(token_url = %self.token_url, "Refreshing access token");
        self.token_request(&[
            ("refresh_token", refresh_token),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "refresh_token"),
        ])
        .await
    }

    /// POSTs a form-encoded body to the token endpoint.
    async fn token_request(&self, params: &[(&str, &str)]) -> Result<AccessToken, HarvestError> {
        let response = self
            .http
            .post(&self.token_url)
            .header("Accept", "application/json")
            .form(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    return HarvestError::timeout(
                        Duration::from_secs(TOKEN_TIMEOUT_SECS),
                        "POST oauth2/token",
                    );
                }
                HarvestError::Http(e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(HarvestError::Http)?;

        if !status.is_success() {
            let message = serde_json::from_str::<TokenErrorBody>(&text)
                .ok()
                .and_then(|b| b.error_description.or(b.error))
                .unwrap_or_else(|| format!("token endpoint returned {}", status));
            // Redact every credential sent (secret, code, refresh token).
            let message = params
                .iter()
                .filter(|(k, _)| !matches!(*k, "client_id" | "grant_type"))
                .fold(message, |message, (_, v)| HarvestError::sanitize_message(&message, v));
            return Err(HarvestError::oauth(message));
        }

        let token: AccessToken = serde_json::from_str(&text)?;
        Ok(token)
    }
}
