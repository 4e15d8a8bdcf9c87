use config::{Config, ConfigError, File};
use dotenv::dotenv;
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AwesomeApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TwelveDataConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub timeout_secs: u64,
}

/// Process configuration, loaded once at startup and injected into the
/// server. Handlers only see read-only copies; nothing is re-read from
/// the environment while requests are in flight.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: Server,
    pub awesome_api: AwesomeApiConfig,
    pub twelve_data: TwelveDataConfig,
    pub upstream: UpstreamConfig,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        // Try to load config file
        let config_builder = Config::builder().add_source(File::with_name("config"));

        let mut settings: Settings = match config_builder.build() {
            Ok(config) => {
                // Successfully loaded config file, deserialize it
                config.try_deserialize()?
            }
            Err(err) => {
                // Config file not found or error loading, use default values
                eprintln!(
                    "Warning: Could not load config file: {}, using default values",
                    err
                );
                Self::default_values()
            }
        };

        // The TwelveData key comes from the environment; an empty value
        // counts as unset, same as the hosting platform leaving it out.
        if settings.twelve_data.api_key.is_none() {
            settings.twelve_data.api_key = env::var("API_KEY").ok();
        }
        settings.twelve_data.api_key = settings
            .twelve_data
            .api_key
            .take()
            .filter(|key| !key.is_empty());

        Ok(settings)
    }

    fn default_values() -> Self {
        Self {
            server: Server {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            awesome_api: AwesomeApiConfig {
                base_url: "https://economia.awesomeapi.com.br".to_string(),
            },
            twelve_data: TwelveDataConfig {
                base_url: "https://api.twelvedata.com".to_string(),
                api_key: None,
            },
            upstream: UpstreamConfig { timeout_secs: 5 },
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream.timeout_secs)
    }
}
