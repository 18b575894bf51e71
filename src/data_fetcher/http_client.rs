//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

/// Creates the shared HTTP client with connection pooling.
///
/// No timeout is set unless one is configured; requests then wait as long as
/// the transport allows.
pub fn create_http_client(timeout_seconds: Option<u64>) -> Result<Client, reqwest::Error> {
    let mut builder =
        Client::builder().pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST);
    if let Some(seconds) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    builder.build()
}

/// Creates an HTTP client for testing with the transport default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client(None).expect("Failed to create test HTTP client")
}
