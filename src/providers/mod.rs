// Upstream provider clients
use crate::error::{GatewayError, Result};
use std::time::Duration;

pub mod awesome_api;
pub mod twelve_data;

// Every outbound client carries an explicit timeout instead of
// inheriting the reqwest default.
pub(crate) fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| {
            GatewayError::ConfigurationError(format!("Failed to create HTTP client: {}", e))
        })
}
