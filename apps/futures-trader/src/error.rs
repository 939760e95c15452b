//! Error taxonomy for a single order interaction.
//!
//! Every failure the trader can hit while handling one order falls into one
//! of six categories. Input errors are reported and the user is prompted
//! again; exchange errors are reported and the attempt ends. None of them
//! stop the session.

use thiserror::Error;

use crate::application::ports::ExchangeError;
use crate::domain::order_entry::OrderInputError;

/// Errors surfaced to the user for one order attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TradeError {
    /// Symbol is malformed or not listed.
    #[error("Invalid symbol '{0}'. Please check and try again")]
    InvalidSymbol(String),

    /// Side is neither BUY nor SELL.
    #[error("{0}")]
    InvalidSide(String),

    /// Unsupported order type.
    #[error("{0}")]
    InvalidOrderType(String),

    /// Quantity or a price could not be used.
    #[error("{0}")]
    InvalidNumericInput(String),

    /// The exchange refused the order.
    #[error("Exchange rejected the order ({code}): {reason}")]
    ExchangeRejection {
        /// Exchange error code.
        code: i64,
        /// Exchange error message.
        reason: String,
    },

    /// The order could not be delivered or the answer could not be read.
    #[error("Error placing order: {0}")]
    TransportError(String),
}

impl From<OrderInputError> for TradeError {
    fn from(err: OrderInputError) -> Self {
        let message = err.to_string();
        match err {
            OrderInputError::InvalidSymbol { symbol } => Self::InvalidSymbol(symbol),
            OrderInputError::InvalidSide { .. } => Self::InvalidSide(message),
            OrderInputError::InvalidOrderType { .. } => Self::InvalidOrderType(message),
            OrderInputError::InvalidNumericInput { .. } => Self::InvalidNumericInput(message),
        }
    }
}

impl From<ExchangeError> for TradeError {
    fn from(err: ExchangeError) -> Self {
        match err {
            ExchangeError::Rejected { code, reason } => Self::ExchangeRejection { code, reason },
            ExchangeError::Transport { message } | ExchangeError::Unknown { message } => {
                Self::TransportError(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_map_to_input_variants() {
        let err: TradeError = OrderInputError::InvalidSide {
            input: "HOLD".to_string(),
        }
        .into();
        assert!(matches!(err, TradeError::InvalidSide(_)));

        let err: TradeError = OrderInputError::numeric("price", "abc", "please enter a number").into();
        assert!(matches!(err, TradeError::InvalidNumericInput(_)));
        assert_eq!(err.to_string(), "Invalid price 'abc': please enter a number");
    }

    #[test]
    fn invalid_symbol_keeps_symbol() {
        let err: TradeError = OrderInputError::InvalidSymbol {
            symbol: "FOO".to_string(),
        }
        .into();
        assert_eq!(err, TradeError::InvalidSymbol("FOO".to_string()));
    }

    #[test]
    fn exchange_rejection_maps() {
        let err: TradeError = ExchangeError::Rejected {
            code: -2019,
            reason: "Margin is insufficient.".to_string(),
        }
        .into();
        assert!(matches!(err, TradeError::ExchangeRejection { code: -2019, .. }));
    }

    #[test]
    fn transport_and_unknown_collapse() {
        let transport: TradeError = ExchangeError::Transport {
            message: "connection refused".to_string(),
        }
        .into();
        let unknown: TradeError = ExchangeError::Unknown {
            message: "HTTP 502".to_string(),
        }
        .into();
        assert!(matches!(transport, TradeError::TransportError(_)));
        assert!(matches!(unknown, TradeError::TransportError(_)));
    }
}
