//! Order type as chosen by the user (market, limit, stop-limit).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::order_entry::OrderInputError;

/// Order type specifying execution behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Market order - execute at best available price.
    Market,
    /// Limit order - execute at specified price or better.
    Limit,
    /// Stop-limit order - becomes limit order when stop price is reached.
    StopLimit,
}

impl OrderType {
    /// Every type offered to the user, in prompt order.
    pub const ALL: [Self; 3] = [Self::Market, Self::Limit, Self::StopLimit];

    /// Returns true if this order type requires a limit price.
    #[must_use]
    pub const fn requires_limit_price(&self) -> bool {
        matches!(self, Self::Limit | Self::StopLimit)
    }

    /// Returns true if this order type requires a stop price.
    #[must_use]
    pub const fn requires_stop_price(&self) -> bool {
        matches!(self, Self::StopLimit)
    }
}

impl FromStr for OrderType {
    type Err = OrderInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MARKET" => Ok(Self::Market),
            "LIMIT" => Ok(Self::Limit),
            "STOP_LIMIT" => Ok(Self::StopLimit),
            _ => Err(OrderInputError::InvalidOrderType {
                input: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => write!(f, "MARKET"),
            Self::Limit => write!(f, "LIMIT"),
            Self::StopLimit => write!(f, "STOP_LIMIT"),
        }
    }
}
