// Request parameters, response payloads, period mapping
use crate::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    pub de: Option<String>,
    pub para: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub de: Option<String>,
    pub para: Option<String>,
    pub periodo: Option<String>,
}

impl QuoteParams {
    pub fn pair(&self) -> Result<(String, String)> {
        require_pair(&self.de, &self.para)
    }
}

impl HistoryParams {
    pub fn pair(&self) -> Result<(String, String)> {
        require_pair(&self.de, &self.para)
    }

    pub fn period(&self) -> Period {
        Period::parse(self.periodo.as_deref().unwrap_or("1D"))
    }
}

// Both endpoints require a non-empty currency pair.
fn require_pair(de: &Option<String>, para: &Option<String>) -> Result<(String, String)> {
    match (de.as_deref(), para.as_deref()) {
        (Some(de), Some(para)) if !de.is_empty() && !para.is_empty() => {
            Ok((de.to_string(), para.to_string()))
        }
        _ => Err(GatewayError::InvalidRequest(
            "Parameters 'de' and 'para' are required".to_string(),
        )),
    }
}

/// Latest-quote payload: the bid price for the requested pair, or an
/// empty string when the upstream response does not carry the pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub cotacao: String,
}

/// A single historical observation. Upstreams disagree on whether
/// timestamps and prices are strings or numbers, so both fields pass
/// through as raw JSON values (null when the upstream omits them).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub timestamp: Value,
    pub valor: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub dados: Vec<HistoryPoint>,
}

/// Historical window selected by the `periodo` query parameter.
///
/// "1D" selects the hourly intraday series; every other value selects
/// the daily series with a day-count limit. Unrecognized values fall
/// back to the 30-day window, same as "1M".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Intraday,
    Daily(u32),
}

impl Period {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "1D" => Period::Intraday,
            "5D" => Period::Daily(5),
            _ => Period::Daily(30),
        }
    }
}
