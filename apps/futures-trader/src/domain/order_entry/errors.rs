//! Order entry errors.

use thiserror::Error;

/// Errors raised while turning user input into an [`OrderRequest`](super::OrderRequest).
///
/// All of these are caught before anything is sent to the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderInputError {
    /// Symbol is malformed or not listed by the exchange.
    #[error("Invalid symbol: {symbol}")]
    InvalidSymbol {
        /// The rejected symbol.
        symbol: String,
    },

    /// Side is neither BUY nor SELL.
    #[error("Invalid side '{input}'. Please enter BUY or SELL")]
    InvalidSide {
        /// The rejected input.
        input: String,
    },

    /// Order type is not one of the supported types.
    #[error("Invalid order type '{input}'. Please use MARKET, LIMIT, or STOP_LIMIT")]
    InvalidOrderType {
        /// The rejected input.
        input: String,
    },

    /// A numeric field could not be parsed or is out of range.
    #[error("Invalid {field} '{input}': {message}")]
    InvalidNumericInput {
        /// Field being parsed (quantity, price, stop price).
        field: &'static str,
        /// The rejected input.
        input: String,
        /// Why the input was rejected.
        message: String,
    },
}

impl OrderInputError {
    pub(crate) fn numeric(field: &'static str, input: impl Into<String>, message: &str) -> Self {
        Self::InvalidNumericInput {
            field,
            input: input.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_side_message() {
        let err = OrderInputError::InvalidSide {
            input: "HOLD".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid side 'HOLD'. Please enter BUY or SELL"
        );
    }

    #[test]
    fn numeric_helper_builds_variant() {
        let err = OrderInputError::numeric("price", "abc", "not a number");
        assert_eq!(err.to_string(), "Invalid price 'abc': not a number");
    }
}
