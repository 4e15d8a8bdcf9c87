// AwesomeAPI client: latest quote and daily series
use crate::error::{GatewayError, Result};
use crate::models::HistoryPoint;
use crate::providers::build_http_client;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// One pair entry in the "last quote" response. Only the bid is
/// surfaced; the remaining fields (ask, high, low, ...) are ignored.
#[derive(Debug, Deserialize)]
struct PairQuote {
    #[serde(default)]
    bid: String,
}

/// One entry in the daily-series response. Both fields are forwarded
/// as-is, so they stay untyped and absent fields become JSON null.
#[derive(Debug, Deserialize)]
struct DailyEntry {
    #[serde(default)]
    timestamp: Option<Value>,
    #[serde(default)]
    bid: Option<Value>,
}

pub struct AwesomeApiProvider {
    client: reqwest::Client,
    base_url: String,
}

impl AwesomeApiProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = build_http_client(timeout)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the latest quote for a currency pair and returns its bid.
    ///
    /// The upstream responds with an object keyed by the concatenated
    /// pair code ("USD" + "BRL" -> "USDBRL"). A response that does not
    /// carry the requested pair yields an empty string, not an error.
    pub async fn latest_bid(&self, de: &str, para: &str) -> Result<String> {
        let url = format!("{}/json/last/{}-{}", self.base_url, de, para);

        let response = self.client.get(&url).send().await.map_err(|e| {
            GatewayError::UpstreamUnavailable(format!("AwesomeAPI request failed: {}", e))
        })?;

        let body = response.text().await.map_err(|e| {
            GatewayError::UpstreamUnavailable(format!("Failed to read AwesomeAPI response: {}", e))
        })?;

        let quotes: HashMap<String, PairQuote> = serde_json::from_str(&body).map_err(|e| {
            GatewayError::UpstreamParseError(format!("Malformed AwesomeAPI response: {}", e))
        })?;

        let pair_key = format!("{}{}", de, para);
        Ok(quotes
            .get(&pair_key)
            .map(|quote| quote.bid.clone())
            .unwrap_or_default())
    }

    /// Fetches the daily close series for a currency pair, limited to
    /// the given number of days, preserving upstream order.
    pub async fn daily_series(
        &self,
        de: &str,
        para: &str,
        limit: u32,
    ) -> Result<Vec<HistoryPoint>> {
        let url = format!("{}/json/daily/{}-{}/{}", self.base_url, de, para, limit);

        let response = self.client.get(&url).send().await.map_err(|e| {
            GatewayError::UpstreamUnavailable(format!("AwesomeAPI request failed: {}", e))
        })?;

        let body = response.text().await.map_err(|e| {
            GatewayError::UpstreamUnavailable(format!("Failed to read AwesomeAPI response: {}", e))
        })?;

        let entries: Vec<DailyEntry> = serde_json::from_str(&body).map_err(|e| {
            GatewayError::UpstreamParseError(format!("Malformed AwesomeAPI response: {}", e))
        })?;

        // Every entry is forwarded, even when fields are missing.
        Ok(entries
            .into_iter()
            .map(|entry| HistoryPoint {
                timestamp: entry.timestamp.unwrap_or(Value::Null),
                valor: entry.bid.unwrap_or(Value::Null),
            })
            .collect())
    }
}
