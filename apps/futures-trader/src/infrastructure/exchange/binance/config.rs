//! Binance Futures adapter configuration.

use std::time::Duration;

/// Default `recvWindow` for signed requests, in milliseconds.
pub const DEFAULT_RECV_WINDOW_MS: u64 = 5_000;

/// Environment for the Binance USD-M Futures API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExchangeEnvironment {
    /// Futures testnet (simulated funds).
    #[default]
    Testnet,
    /// Production (real money).
    Production,
}

impl ExchangeEnvironment {
    /// Parse environment from string. Anything unrecognized is the testnet.
    #[must_use]
    pub fn from_str_case_insensitive(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "PRODUCTION" | "LIVE" | "MAINNET" => Self::Production,
            _ => Self::Testnet,
        }
    }

    /// Get the base URL for the futures REST API.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Testnet => "https://testnet.binancefuture.com",
            Self::Production => "https://fapi.binance.com",
        }
    }

    /// Check if this is the testnet.
    #[must_use]
    pub const fn is_testnet(&self) -> bool {
        matches!(self, Self::Testnet)
    }
}

impl std::fmt::Display for ExchangeEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Testnet => write!(f, "TESTNET"),
            Self::Production => write!(f, "PRODUCTION"),
        }
    }
}

/// API credentials.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    /// Create new credentials.
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Get the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the API secret.
    #[must_use]
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// Returns true if either half is blank.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.api_key.trim().is_empty() || self.api_secret.trim().is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Configuration for the Binance Futures adapter.
#[derive(Debug, Clone)]
pub struct BinanceConfig {
    /// API credentials.
    pub credentials: Credentials,
    /// Target environment.
    pub environment: ExchangeEnvironment,
    /// Explicit base URL; takes precedence over the environment's URL.
    pub base_url: Option<String>,
    /// `recvWindow` sent with signed requests, in milliseconds.
    pub recv_window_ms: u64,
    /// HTTP request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl BinanceConfig {
    /// Create a new configuration.
    #[must_use]
    pub const fn new(credentials: Credentials, environment: ExchangeEnvironment) -> Self {
        Self {
            credentials,
            environment,
            base_url: None,
            recv_window_ms: DEFAULT_RECV_WINDOW_MS,
            timeout: None,
        }
    }

    /// Point the adapter at an explicit base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the `recvWindow`.
    #[must_use]
    pub const fn with_recv_window_ms(mut self, recv_window_ms: u64) -> Self {
        self.recv_window_ms = recv_window_ms;
        self
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Get the REST API base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
            .trim_end_matches('/')
            .to_string()
    }
}
