//! Binance-specific error types.

use thiserror::Error;

use crate::application::ports::ExchangeError;

/// Errors from the Binance adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BinanceError {
    /// Request could not be sent or the response could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// API returned a structured error body.
    #[error("API error: {code} - {message}")]
    Api {
        /// Binance error code (negative for request errors).
        code: i64,
        /// Error message from the API.
        message: String,
    },

    /// Non-success status with a body that is not a Binance error.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// API key or secret is missing.
    #[error("API key and secret are required")]
    MissingCredentials,

    /// Success response that could not be interpreted.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request could not be signed.
    #[error("Signing failed: {0}")]
    Signing(String),
}

impl From<BinanceError> for ExchangeError {
    fn from(err: BinanceError) -> Self {
        match err {
            BinanceError::Api { code, message } => Self::Rejected {
                code,
                reason: message,
            },
            BinanceError::Network(message) | BinanceError::JsonParse(message) => {
                Self::Transport { message }
            }
            BinanceError::Http { status, body } => Self::Unknown {
                message: format!("HTTP {status}: {body}"),
            },
            BinanceError::MissingCredentials
            | BinanceError::InvalidUrl(_)
            | BinanceError::Signing(_) => Self::Unknown {
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_becomes_rejection() {
        let err: ExchangeError = BinanceError::Api {
            code: -1121,
            message: "Invalid symbol.".to_string(),
        }
        .into();
        assert_eq!(
            err,
            ExchangeError::Rejected {
                code: -1121,
                reason: "Invalid symbol.".to_string()
            }
        );
    }

    #[test]
    fn network_error_becomes_transport() {
        let err: ExchangeError = BinanceError::Network("connection refused".to_string()).into();
        assert!(matches!(err, ExchangeError::Transport { .. }));
    }

    #[test]
    fn unparseable_body_becomes_transport() {
        let err: ExchangeError = BinanceError::JsonParse("expected value".to_string()).into();
        assert!(matches!(err, ExchangeError::Transport { .. }));
    }

    #[test]
    fn bare_http_error_becomes_unknown() {
        let err: ExchangeError = BinanceError::Http {
            status: 502,
            body: "Bad Gateway".to_string(),
        }
        .into();
        assert_eq!(
            err,
            ExchangeError::Unknown {
                message: "HTTP 502: Bad Gateway".to_string()
            }
        );
    }

    #[test]
    fn missing_credentials_message() {
        let err: ExchangeError = BinanceError::MissingCredentials.into();
        assert!(err.to_string().contains("API key and secret are required"));
    }
}
