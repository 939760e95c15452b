//! Order side (buy or sell).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::order_entry::OrderInputError;

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// Buy order.
    Buy,
    /// Sell order.
    Sell,
}

impl OrderSide {
    /// Wire representation used by the exchange.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl FromStr for OrderSide {
    type Err = OrderInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            _ => Err(OrderInputError::InvalidSide {
                input: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("BUY", OrderSide::Buy ; "upper buy")]
    #[test_case("sell", OrderSide::Sell ; "lower sell")]
    #[test_case("  Buy  ", OrderSide::Buy ; "padded mixed case")]
    fn order_side_parses(input: &str, expected: OrderSide) {
        assert_eq!(input.parse::<OrderSide>().unwrap(), expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("LONG" ; "long")]
    #[test_case("B" ; "abbreviation")]
    fn order_side_rejects(input: &str) {
        assert!(matches!(
            input.parse::<OrderSide>(),
            Err(OrderInputError::InvalidSide { .. })
        ));
    }

    #[test]
    fn order_side_display() {
        assert_eq!(format!("{}", OrderSide::Buy), "BUY");
        assert_eq!(format!("{}", OrderSide::Sell), "SELL");
    }

    #[test]
    fn order_side_serde() {
        let json = serde_json::to_string(&OrderSide::Buy).unwrap();
        assert_eq!(json, "\"BUY\"");

        let parsed: OrderSide = serde_json::from_str("\"SELL\"").unwrap();
        assert_eq!(parsed, OrderSide::Sell);
    }
}
