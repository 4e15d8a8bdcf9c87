// TwelveData client: hourly intraday series
use crate::error::{GatewayError, Result};
use crate::models::HistoryPoint;
use crate::providers::build_http_client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const INTERVAL: &str = "1h";
const OUTPUT_SIZE: &str = "24";

/// Time-series envelope. TwelveData reports errors as a JSON object
/// without a "values" key, which decodes to an empty series here.
#[derive(Debug, Deserialize)]
struct TimeSeriesResponse {
    #[serde(default)]
    values: Vec<Value>,
}

pub struct TwelveDataProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl TwelveDataProvider {
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = build_http_client(timeout)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Fetches the last 24 hourly observations for a currency pair.
    ///
    /// Elements carrying both "datetime" and "close" are forwarded in
    /// upstream order; anything else in the array is skipped silently.
    pub async fn intraday_series(&self, de: &str, para: &str) -> Result<Vec<HistoryPoint>> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GatewayError::ConfigurationError("TwelveData API key is not set".to_string())
        })?;

        let url = format!("{}/time_series", self.base_url);
        let params = [
            ("symbol", format!("{}/{}", de, para)),
            ("interval", INTERVAL.to_string()),
            ("outputsize", OUTPUT_SIZE.to_string()),
            ("apikey", api_key.to_string()),
        ];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                GatewayError::UpstreamUnavailable(format!("TwelveData request failed: {}", e))
            })?;

        let body = response.text().await.map_err(|e| {
            GatewayError::UpstreamUnavailable(format!("Failed to read TwelveData response: {}", e))
        })?;

        let series: TimeSeriesResponse = serde_json::from_str(&body).map_err(|e| {
            GatewayError::UpstreamParseError(format!("Malformed TwelveData response: {}", e))
        })?;

        let points = series
            .values
            .iter()
            .filter_map(|value| {
                let entry = value.as_object()?;
                let datetime = entry.get("datetime")?;
                let close = entry.get("close")?;
                Some(HistoryPoint {
                    timestamp: datetime.clone(),
                    valor: close.clone(),
                })
            })
            .collect();

        Ok(points)
    }
}
