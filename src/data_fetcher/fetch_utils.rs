//! Fetching the raw league listing from a URL or a local file

use reqwest::Client;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde_json::error::Category;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, error, info, instrument, warn};

use super::models::{LeagueEntry, ListingPayload};
use crate::error::AppError;

/// Where the listing is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSource {
    /// Relay endpoint or upstream leagues API
    Url(String),
    /// Static JSON file on disk
    File(PathBuf),
}

impl ListingSource {
    /// Interprets `http://` and `https://` values as URLs and anything else as a file path.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            ListingSource::Url(value.to_string())
        } else {
            ListingSource::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for ListingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingSource::Url(url) => write!(f, "{url}"),
            ListingSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches the listing from `source` and decodes it into league entries.
///
/// Makes exactly one attempt. Entries are returned in source order and are
/// not normalized yet.
#[instrument(skip(client))]
pub async fn fetch_listing(
    client: &Client,
    source: &ListingSource,
) -> Result<Vec<LeagueEntry>, AppError> {
    let source_name = source.to_string();
    info!("Fetching league listing from: {source_name}");

    let body = match source {
        ListingSource::Url(url) => fetch_text(client, url).await?,
        ListingSource::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
            error!("Failed to read listing file {}: {}", path.display(), e);
            AppError::upstream_unavailable(&source_name, e.to_string())
        })?,
    };

    let entries = parse_listing(&body, &source_name)?;
    info!("Fetched {} leagues from {}", entries.len(), source_name);
    Ok(entries)
}

async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        AppError::upstream_unavailable(url, e.to_string())
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if status.as_u16() == 429 {
        let retry_after = parse_retry_after(response.headers());
        warn!("Rate limited by {url}, Retry-After: {retry_after:?}");
        return Err(AppError::upstream_rate_limited(url, retry_after));
    }

    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status.as_u16(), reason, url);
        return Err(AppError::upstream_http(status.as_u16(), reason, url));
    }

    response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::upstream_unavailable(url, e.to_string())
    })
}

/// Reads a numeric `Retry-After` header. HTTP-date values are not interpreted.
pub fn parse_retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
}

/// Decodes a listing body, telling apart non-JSON from JSON of the wrong shape.
pub fn parse_listing(body: &str, source_name: &str) -> Result<Vec<LeagueEntry>, AppError> {
    debug!("Response length: {} bytes", body.len());

    match serde_json::from_str::<ListingPayload>(body) {
        Ok(payload) => Ok(payload.into_entries()),
        Err(e) => {
            error!("Failed to parse listing: {} ({})", e, source_name);
            error!(
                "Response text (first 200 chars): {}",
                body.chars().take(200).collect::<String>()
            );

            let message = match e.classify() {
                Category::Eof if body.trim().is_empty() => "Response body is empty".to_string(),
                Category::Syntax | Category::Eof => "Response is not valid JSON".to_string(),
                Category::Data | Category::Io => format!("Unexpected data structure: {e}"),
            };
            Err(AppError::upstream_malformed(message, source_name))
        }
    }
}
