//! Trader Configuration Settings
//!
//! Configuration types for the trader, loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::infrastructure::exchange::binance::{
    BinanceConfig, Credentials, DEFAULT_RECV_WINDOW_MS, ExchangeEnvironment,
};

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "trading_bot.log";

/// Complete trader configuration.
#[derive(Debug, Clone)]
pub struct TraderConfig {
    /// Exchange environment.
    pub environment: ExchangeEnvironment,
    /// Base URL override for the futures REST API.
    pub base_url: Option<String>,
    /// `recvWindow` for signed requests, in milliseconds.
    pub recv_window_ms: u64,
    /// HTTP timeout. `None` keeps the transport default.
    pub http_timeout: Option<Duration>,
    /// Append-only log file.
    pub log_file: PathBuf,
    /// API key to use instead of prompting.
    pub api_key: Option<String>,
    /// API secret to use instead of prompting.
    pub api_secret: Option<String>,
}

impl Default for TraderConfig {
    fn default() -> Self {
        Self {
            environment: ExchangeEnvironment::default(),
            base_url: None,
            recv_window_ms: DEFAULT_RECV_WINDOW_MS,
            http_timeout: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            api_key: None,
            api_secret: None,
        }
    }
}

impl TraderConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but unparseable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = get("BINANCE_ENV")
            .map(|s| ExchangeEnvironment::from_str_case_insensitive(&s))
            .unwrap_or_default();

        let recv_window_ms =
            parse_env_u64(&get, "BINANCE_RECV_WINDOW_MS")?.unwrap_or(DEFAULT_RECV_WINDOW_MS);

        let http_timeout =
            parse_env_u64(&get, "TRADER_HTTP_TIMEOUT_SECS")?.map(Duration::from_secs);

        let log_file = get("TRADER_LOG_FILE").map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from);

        Ok(Self {
            environment,
            base_url: get("BINANCE_FUTURES_BASE_URL"),
            recv_window_ms,
            http_timeout,
            log_file,
            api_key: get("BINANCE_API_KEY"),
            api_secret: get("BINANCE_API_SECRET"),
        })
    }

    /// Build the adapter configuration for the given credentials.
    #[must_use]
    pub fn binance_config(&self, credentials: Credentials) -> BinanceConfig {
        let mut config = BinanceConfig::new(credentials, self.environment)
            .with_recv_window_ms(self.recv_window_ms);
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(timeout) = self.http_timeout {
            config = config.with_timeout(timeout);
        }
        config
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable is set to something that is not a valid number.
    #[error("environment variable {key} must be a non-negative integer, got '{value}'")]
    InvalidNumber {
        /// Variable name.
        key: String,
        /// Offending value.
        value: String,
    },
}

fn parse_env_u64<F>(get: &F, key: &str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|v| {
            v.trim().parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
                key: key.to_string(),
                value: v.clone(),
            })
        })
        .transpose()
}
