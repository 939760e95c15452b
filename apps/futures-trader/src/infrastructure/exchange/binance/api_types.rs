//! Binance Futures REST request and response types.
//!
//! These types map directly to the USD-M Futures API format. Only the fields
//! the trader reads are declared; everything else is ignored on input and
//! preserved verbatim in [`OrderAck::raw`].

use serde::Deserialize;

use crate::application::ports::{ExchangeInfo, InstrumentInfo, OrderAck};

use super::error::BinanceError;

// ============================================================================
// Error Types
// ============================================================================

/// Error body returned with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct BinanceErrorResponse {
    /// Error code (negative for request errors).
    pub code: i64,
    /// Error message.
    pub msg: String,
}

// ============================================================================
// Exchange Info Types
// ============================================================================

/// `GET /fapi/v1/exchangeInfo` response.
#[derive(Debug, Clone, Deserialize)]
pub struct BinanceExchangeInfo {
    /// Listed contracts.
    #[serde(default)]
    pub symbols: Vec<BinanceSymbol>,
}

/// One listed contract.
#[derive(Debug, Clone, Deserialize)]
pub struct BinanceSymbol {
    /// Contract symbol.
    pub symbol: String,
    /// Trading status, e.g. `TRADING`.
    #[serde(default)]
    pub status: String,
}

impl BinanceExchangeInfo {
    /// Convert to the port's instrument list.
    #[must_use]
    pub fn into_exchange_info(self) -> ExchangeInfo {
        ExchangeInfo {
            symbols: self
                .symbols
                .into_iter()
                .map(|s| InstrumentInfo {
                    symbol: s.symbol,
                    status: s.status,
                })
                .collect(),
        }
    }
}

// ============================================================================
// Order Response Types
// ============================================================================

/// Turn a `POST /fapi/v1/order` response body into an acknowledgment.
///
/// `orderId` is numeric on the wire but is accepted as a string too.
pub fn order_ack_from_value(raw: serde_json::Value) -> Result<OrderAck, BinanceError> {
    let order_id = match raw.get("orderId") {
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
        _ => {
            return Err(BinanceError::JsonParse(format!(
                "order response has no orderId: {raw}"
            )));
        }
    };
    Ok(OrderAck { order_id, raw })
}
