//! Optional local check for long URLs
//!
//! The backend stays the authority on validity; this only catches obvious
//! mistakes before a request is spent on them.

use url::Url;

#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    UnsupportedScheme(String),
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::UnsupportedScheme(scheme) => write!(
                f,
                "Unsupported scheme: {}. Only http:// and https:// are allowed",
                scheme
            ),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// Accepts absolute `http`/`https` URLs
pub fn validate_url(url: &str) -> Result<(), UrlValidationError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let parsed = Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(format!("{}:", other))),
    }

    Ok(())
}

/// 获取 URL 验证错误的用户友好消息
pub fn validation_error_message(error: &UrlValidationError) -> &'static str {
    match error {
        UrlValidationError::EmptyUrl => "URL cannot be empty",
        UrlValidationError::UnsupportedScheme(_) => "URL must start with http:// or https://",
        UrlValidationError::InvalidFormat(_) => "Invalid URL format",
    }
}
