//! CORS-friendly relay in front of poe.ninja.
//!
//! `GET /poe2-leagues` makes one upstream request and answers with the
//! upstream JSON untouched, or a fixed `{ "error": ... }` body with status 500.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use bytes::Bytes;
use http::{StatusCode, header::CONTENT_TYPE};
use reqwest::{Client, header::USER_AGENT};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{debug, error, info};

use crate::constants::relay::{FAILURE_MESSAGE, LISTING_PATH, SPOOFED_USER_AGENT, UPSTREAM_URL};
use crate::data_fetcher::create_http_client;
use crate::error::AppError;

/// Shared relay state
#[derive(Clone)]
pub struct RelayState {
    client: Client,
    upstream_url: String,
}

impl RelayState {
    pub fn new(client: Client, upstream_url: impl Into<String>) -> Self {
        Self {
            client,
            upstream_url: upstream_url.into(),
        }
    }

    /// poe.ninja builds endpoint with a client using the transport defaults
    pub fn from_defaults() -> Result<Self, AppError> {
        Ok(Self::new(create_http_client(None)?, UPSTREAM_URL))
    }

    pub fn upstream_url(&self) -> &str {
        &self.upstream_url
    }
}

pub fn router(state: RelayState) -> Router {
    Router::new()
        .route(LISTING_PATH, get(relay_listing))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves the relay until the listener fails.
pub async fn serve(listener: TcpListener, state: RelayState) -> Result<(), AppError> {
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// GET /poe2-leagues
async fn relay_listing(State(state): State<RelayState>) -> Response {
    match fetch_upstream(&state).await {
        Ok(body) => (StatusCode::OK, [(CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            error!("Error fetching PoE2 Ninja API: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": FAILURE_MESSAGE })),
            )
                .into_response()
        }
    }
}

/// Makes the single upstream call and checks the body is JSON.
pub async fn fetch_upstream(state: &RelayState) -> Result<Bytes, AppError> {
    let url = state.upstream_url.as_str();
    info!("Relaying request to {url}");

    let response = state
        .client
        .get(url)
        .header(USER_AGENT, SPOOFED_USER_AGENT)
        .send()
        .await
        .map_err(|e| AppError::upstream_unavailable(url, e.to_string()))?;

    let status = response.status();
    if status.as_u16() == 429 {
        let retry_after = crate::data_fetcher::fetch_utils::parse_retry_after(response.headers());
        return Err(AppError::upstream_rate_limited(url, retry_after));
    }
    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        return Err(AppError::upstream_http(status.as_u16(), reason, url));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| AppError::upstream_unavailable(url, e.to_string()))?;
    serde_json::from_slice::<serde_json::Value>(&body)
        .map_err(|e| AppError::upstream_malformed(e.to_string(), url))?;

    debug!("Relayed {} bytes from {url}", body.len());
    Ok(body)
}
