//! HTTP transport seam
//!
//! `LinkClient` only speaks [`ApiRequest`]/[`ApiResponse`]; the default
//! implementation runs a blocking `ureq` call on Tokio's blocking pool.
//! Non-2xx statuses are returned as responses, not errors, so the caller
//! can read the `{ "error": ... }` body.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace};
use ureq::Agent;

use crate::errors::{ClientError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base address, starting with `/`
    pub path: String,
    /// Query pairs, percent-encoded by the transport
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post_json(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// `ureq`-backed transport bound to one base address
pub struct UreqTransport {
    agent: Agent,
    base_url: String,
}

impl UreqTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn send_blocking(agent: &Agent, url: &str, request: &ApiRequest) -> Result<ApiResponse> {
        let response = match request.method {
            Method::Get => {
                let mut req = agent.get(url);
                for (key, value) in &request.query {
                    req = req.query(key, value);
                }
                req.call()?
            }
            Method::Post => {
                let mut req = agent.post(url);
                for (key, value) in &request.query {
                    req = req.query(key, value);
                }
                match &request.body {
                    Some(body) => req.send_json(body)?,
                    None => req.send_empty()?,
                }
            }
        };

        let status = response.status().as_u16();
        let body = response.into_body().read_to_string()?;
        trace!(
            "{} {} -> {} ({} bytes)",
            method_name(request.method),
            url,
            status,
            body.len()
        );
        Ok(ApiResponse { status, body })
    }
}

fn method_name(method: Method) -> &'static str {
    match method {
        Method::Get => "GET",
        Method::Post => "POST",
    }
}

#[async_trait]
impl HttpTransport for UreqTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!("{} {}", method_name(request.method), url);

        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || Self::send_blocking(&agent, &url, &request))
            .await
            .map_err(|e| ClientError::network(format!("Request task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builders() {
        let req = ApiRequest::get("/api/stats/abc123").with_query("token", "t 1");
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.query, vec![("token".to_string(), "t 1".to_string())]);
        assert!(req.body.is_none());

        let req = ApiRequest::post_json("/api/shorten", serde_json::json!({"url": "x"}));
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.body, Some(serde_json::json!({"url": "x"})));
    }

    #[test]
    fn test_response_success_range() {
        let ok = |status| ApiResponse {
            status,
            body: String::new(),
        };
        assert!(ok(200).is_success());
        assert!(ok(201).is_success());
        assert!(!ok(302).is_success());
        assert!(!ok(400).is_success());
        assert!(!ok(500).is_success());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let t = UreqTransport::new("http://localhost:5050/", Duration::from_secs(1));
        assert_eq!(t.base_url(), "http://localhost:5050");
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Port 9 (discard) on loopback is closed on any sane test box
        let t = UreqTransport::new("http://127.0.0.1:9", Duration::from_secs(2));
        let err = t.send(ApiRequest::get("/api/health")).await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)), "got: {:?}", err);
    }
}
