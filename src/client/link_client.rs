//! Short-link creation and analytics lookup against the backend API

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::transport::{ApiRequest, ApiResponse, HttpTransport, UreqTransport};
use super::types::{AnalyticsRecord, HealthStatus, ShortLinkResult, ShortenRequest};
use crate::config::StaticConfig;
use crate::errors::{ClientError, Result};
use crate::storage::{StoreFactory, TokenStore};
use crate::utils::url_validator::{validate_url, validation_error_message};

/// Fallback when a rejected shorten call carries no `error` field
pub const SHORTEN_FAILED_MESSAGE: &str = "Failed to shorten URL";
/// Fallback when a rejected stats call carries no `error` field
pub const LOOKUP_FAILED_MESSAGE: &str = "Not found";

/// Link operations client.
///
/// No retries and no caching: each call hits the backend once and any
/// failure is returned to the caller as-is.
pub struct LinkClient {
    transport: Arc<dyn HttpTransport>,
    tokens: Arc<TokenStore>,
    validate_urls: bool,
}

impl LinkClient {
    pub fn new(transport: Arc<dyn HttpTransport>, tokens: Arc<TokenStore>) -> Self {
        Self {
            transport,
            tokens,
            validate_urls: false,
        }
    }

    /// Build the transport and token store described by `config`
    pub fn from_config(config: &StaticConfig) -> Result<Self> {
        let transport = UreqTransport::new(
            &config.client.base_url,
            Duration::from_secs(config.client.timeout_secs),
        );
        let tokens = TokenStore::new(StoreFactory::create(&config.storage)?);
        debug!(
            "Client for {} using the {} token store",
            config.client.base_url, config.storage.backend
        );
        Ok(Self::new(Arc::new(transport), Arc::new(tokens))
            .with_url_validation(config.client.validate_urls))
    }

    /// Reject non-http(s) input locally before calling the backend
    pub fn with_url_validation(mut self, enabled: bool) -> Self {
        self.validate_urls = enabled;
        self
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Create a short link and remember its analytics token
    pub async fn create_short_link(&self, long_url: &str) -> Result<ShortLinkResult> {
        let long_url = long_url.trim();
        if long_url.is_empty() {
            return Err(ClientError::validation("URL cannot be empty"));
        }
        if self.validate_urls
            && let Err(e) = validate_url(long_url)
        {
            return Err(ClientError::validation(validation_error_message(&e)));
        }

        let body = serde_json::to_value(ShortenRequest { url: long_url })?;
        let response = self
            .transport
            .send(ApiRequest::post_json("/api/shorten", body))
            .await?;

        if !response.is_success() {
            return Err(ClientError::creation(error_message(
                &response,
                SHORTEN_FAILED_MESSAGE,
            )));
        }

        let result: ShortLinkResult = decode(&response)?;
        if result.short_code.trim().is_empty() || result.analytics_token.trim().is_empty() {
            return Err(ClientError::network(
                "Invalid response from server: missing short code or analytics token",
            ));
        }
        self.tokens
            .save_token(&result.short_code, &result.analytics_token)
            .await?;
        info!("Shortened {} -> {}", long_url, result.short_url);
        Ok(result)
    }

    /// Locally stored token for `code`, if any
    pub async fn get_token(&self, code: &str) -> Result<Option<String>> {
        self.tokens.get_token(code.trim()).await
    }

    /// Whether a lookup for `code` needs the caller to supply a token
    pub async fn token_needed(&self, code: &str) -> Result<bool> {
        let code = code.trim();
        Ok(!code.is_empty() && self.tokens.get_token(code).await?.is_none())
    }

    /// Fetch click statistics for `code`.
    ///
    /// A stored token for `code` takes precedence over `token`. Fails with
    /// `TokenRequired` without touching the network when neither exists.
    pub async fn fetch_analytics(
        &self,
        code: &str,
        token: Option<&str>,
    ) -> Result<AnalyticsRecord> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ClientError::validation("Short code cannot be empty"));
        }

        let token = match self.tokens.get_token(code).await? {
            Some(stored) => stored,
            None => token.map(str::trim).unwrap_or_default().to_string(),
        };
        if token.is_empty() {
            return Err(ClientError::token_required());
        }

        let path = format!("/api/stats/{}", urlencoding::encode(code));
        let response = self
            .transport
            .send(ApiRequest::get(path).with_query("token", token))
            .await?;

        if !response.is_success() {
            debug!("Stats lookup for {} rejected with {}", code, response.status);
            return Err(ClientError::lookup(error_message(
                &response,
                LOOKUP_FAILED_MESSAGE,
            )));
        }
        decode(&response)
    }

    pub async fn list_tokens(&self) -> Result<Vec<(String, String)>> {
        self.tokens.list().await
    }

    pub async fn forget_token(&self, code: &str) -> Result<bool> {
        self.tokens.forget(code.trim()).await
    }

    /// Backend liveness probe
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.transport.send(ApiRequest::get("/api/health")).await?;
        if !response.is_success() {
            let fallback = format!("Backend answered with status {}", response.status);
            return Err(ClientError::network(error_message(&response, &fallback)));
        }
        decode(&response)
    }
}

/// `error` field of a JSON error body, or `fallback`
fn error_message(response: &ApiResponse, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(&response.body)
        .ok()
        .and_then(|body| {
            body.get("error")
                .and_then(|e| e.as_str())
                .filter(|e| !e.is_empty())
                .map(String::from)
        })
        .unwrap_or_else(|| fallback.to_string())
}

fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T> {
    serde_json::from_str(&response.body)
        .map_err(|e| ClientError::network(format!("Invalid response from server: {}", e)))
}
