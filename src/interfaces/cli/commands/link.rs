//! Shorten, stats and health commands

use colored::Colorize;

use crate::client::{AnalyticsRecord, HealthStatus, LinkClient, ShortLinkResult};
use crate::errors::{ClientError, Result};

pub fn render_short_link(result: &ShortLinkResult) -> String {
    [
        format!(
            "{} Short URL: {}",
            "✓".bold().green(),
            result.short_url.blue().underline()
        ),
        format!("  Code:            {}", result.short_code.cyan()),
        format!("  Analytics Token: {}", result.analytics_token.yellow()),
        format!(
            "{} {}",
            "⚠".bold().yellow(),
            "Save this token to view analytics for this URL!".red()
        ),
    ]
    .join("\n")
}

/// `utc` swaps the backend's `created_at` for its parsed UTC form when it parses
pub fn render_analytics(record: &AnalyticsRecord, utc: bool) -> String {
    let created = match record.created_at_utc() {
        Some(dt) if utc => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        _ => record.created_at.clone(),
    };

    [
        format!(
            "{} {}",
            "Original URL:".bold(),
            record.url.blue().underline()
        ),
        format!(
            "{} {}",
            "Clicks:".bold(),
            record.clicks.to_string().green()
        ),
        format!("{} {}", "Created At:".bold(), created),
    ]
    .join("\n")
}

pub fn render_health(health: &HealthStatus) -> String {
    let mut line = format!("{} Backend status: {}", "✓".bold().green(), health.status.green());
    if let Some(message) = health.message.as_deref().filter(|m| !m.is_empty()) {
        line.push_str(&format!(" ({})", message.dimmed()));
    }
    line
}

pub async fn shorten(client: &LinkClient, url: &str) -> Result<()> {
    let result = client.create_short_link(url).await?;
    println!("{}", render_short_link(&result));
    Ok(())
}

pub fn render_token_hint(code: &str) -> String {
    format!(
        "{} No token stored for {}. Pass the one you saved with {}",
        "ℹ".bold().blue(),
        code.trim().cyan(),
        "--token <TOKEN>".yellow()
    )
}

/// The `--token` hint, when `code` has no stored token and none was given
pub async fn missing_token_hint(
    client: &LinkClient,
    code: &str,
    token: Option<&str>,
) -> Result<Option<String>> {
    let supplied = token.is_some_and(|t| !t.trim().is_empty());
    if !supplied && client.token_needed(code).await? {
        return Ok(Some(render_token_hint(code)));
    }
    Ok(None)
}

pub async fn stats(client: &LinkClient, code: &str, token: Option<&str>, utc: bool) -> Result<()> {
    if let Some(hint) = missing_token_hint(client, code, token).await? {
        println!("{}", hint);
        return Err(ClientError::token_required());
    }

    let record = client.fetch_analytics(code, token).await?;
    println!("{}", render_analytics(&record, utc));
    Ok(())
}

pub async fn health(client: &LinkClient) -> Result<()> {
    let status = client.health().await?;
    println!("{}", render_health(&status));
    Ok(())
}
