//! Futures Exchange Port (Driven Port)
//!
//! Interface for querying instruments and placing orders on a futures exchange.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order_entry::{OrderSide, Symbol, TimeInForce};

/// Order type as the exchange understands it.
///
/// The exchange has no dedicated stop-limit type: a `Stop` order that carries
/// both a stop price and a limit price is a stop-limit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExchangeOrderType {
    /// Market order.
    Market,
    /// Limit order.
    Limit,
    /// Stop order with a limit price.
    Stop,
}

impl ExchangeOrderType {
    /// Wire representation used by the exchange.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
            Self::Stop => "STOP",
        }
    }
}

/// Parameter set for the exchange's order-creation call.
///
/// Optional fields are omitted from the request entirely when `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderParams {
    /// Contract symbol.
    pub symbol: Symbol,
    /// Order side.
    pub side: OrderSide,
    /// Exchange order type.
    #[serde(rename = "type")]
    pub order_type: ExchangeOrderType,
    /// Quantity in contracts.
    pub quantity: Decimal,
    /// Limit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Trigger price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
    /// Time in force.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
}

impl OrderParams {
    /// Key/value pairs in the order they are sent on the wire.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("symbol", self.symbol.as_str().to_string()),
            ("side", self.side.as_str().to_string()),
            ("type", self.order_type.as_str().to_string()),
            ("quantity", self.quantity.normalize().to_string()),
        ];
        if let Some(price) = self.price {
            pairs.push(("price", price.normalize().to_string()));
        }
        if let Some(stop_price) = self.stop_price {
            pairs.push(("stopPrice", stop_price.normalize().to_string()));
        }
        if let Some(tif) = self.time_in_force {
            pairs.push(("timeInForce", tif.as_str().to_string()));
        }
        pairs
    }
}

/// A listed instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentInfo {
    /// Contract symbol.
    pub symbol: String,
    /// Trading status reported by the exchange.
    #[serde(default)]
    pub status: String,
}

/// Instrument list returned by the exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeInfo {
    /// All listed instruments.
    pub symbols: Vec<InstrumentInfo>,
}

impl ExchangeInfo {
    /// Returns true if the symbol is listed.
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.iter().any(|s| s.symbol == symbol.as_str())
    }
}

/// Acknowledgment from the exchange after order creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAck {
    /// Exchange-assigned order ID.
    pub order_id: String,
    /// Full response body, kept for the log.
    pub raw: serde_json::Value,
}

/// Exchange port error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    /// The exchange refused the request (bad parameters, margin, auth).
    #[error("Exchange rejected request ({code}): {reason}")]
    Rejected {
        /// Exchange error code.
        code: i64,
        /// Exchange error message.
        reason: String,
    },

    /// The request never got a usable answer.
    #[error("Exchange connection error: {message}")]
    Transport {
        /// Error details.
        message: String,
    },

    /// Anything else.
    #[error("Exchange error: {message}")]
    Unknown {
        /// Error details.
        message: String,
    },
}

/// Port for futures exchange interactions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FuturesExchangePort: Send + Sync {
    /// Fetch the instrument list.
    async fn exchange_info(&self) -> Result<ExchangeInfo, ExchangeError>;

    /// Create a new order. Called at most once per attempt.
    async fn new_order(&self, params: &OrderParams) -> Result<OrderAck, ExchangeError>;
}
