//! Currency Quote Gateway API
//!
//! This library proxies latest-quote and historical-rate lookups to public
//! currency-data providers and reshapes their responses into a small JSON
//! contract for the client application.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;

// Re-export commonly used items
pub use api::{start_server, AppState};
pub use config::Settings;
pub use error::{GatewayError, Result};
pub use models::{HistoryPoint, HistoryResponse, Period, QuoteResponse};

// Re-export provider types
pub use providers::awesome_api::AwesomeApiProvider;
pub use providers::twelve_data::TwelveDataProvider;
