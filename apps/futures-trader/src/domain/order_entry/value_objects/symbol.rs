//! Symbol value object for futures contracts.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::order_entry::OrderInputError;

/// Maximum accepted symbol length.
const MAX_SYMBOL_LEN: usize = 32;

/// A futures contract symbol.
///
/// Examples: "BTCUSDT", "1000PEPEUSDT", "BTCUSDT_250627" (quarterly delivery).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new Symbol.
    ///
    /// The symbol is trimmed and normalized to uppercase.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_uppercase())
    }

    /// Parse and validate a symbol typed by the user.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSymbol` if the symbol is empty, too long, or contains
    /// characters other than ASCII letters, digits and `_`.
    pub fn parse(value: &str) -> Result<Self, OrderInputError> {
        let symbol = Self::new(value);
        symbol.validate()?;
        Ok(symbol)
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check the symbol is well formed.
    ///
    /// # Errors
    ///
    /// Returns error if symbol is empty or contains invalid characters.
    pub fn validate(&self) -> Result<(), OrderInputError> {
        let well_formed = !self.0.is_empty()
            && self.0.len() <= MAX_SYMBOL_LEN
            && self.0.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

        if well_formed {
            Ok(())
        } else {
            Err(OrderInputError::InvalidSymbol {
                symbol: self.0.clone(),
            })
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_normalizes() {
        assert_eq!(Symbol::new("  btcusdt ").as_str(), "BTCUSDT");
    }

    #[test]
    fn symbol_parse_accepts_numeric_prefix() {
        assert_eq!(Symbol::parse("1000pepeusdt").unwrap().as_str(), "1000PEPEUSDT");
    }

    #[test]
    fn symbol_parse_rejects_empty() {
        assert!(matches!(
            Symbol::parse("   "),
            Err(OrderInputError::InvalidSymbol { .. })
        ));
    }

    #[test]
    fn symbol_parse_accepts_delivery_contract() {
        assert_eq!(
            Symbol::parse("btcusdt_250627").unwrap().as_str(),
            "BTCUSDT_250627"
        );
    }

    #[test]
    fn symbol_parse_rejects_separators() {
        assert!(Symbol::parse("BTC/USDT").is_err());
        assert!(Symbol::parse("BTC-USDT").is_err());
    }

    #[test]
    fn symbol_parse_rejects_overlong() {
        assert!(Symbol::parse(&"A".repeat(MAX_SYMBOL_LEN + 1)).is_err());
    }

    #[test]
    fn symbol_serializes_transparently() {
        let json = serde_json::to_string(&Symbol::new("ETHUSDT")).unwrap();
        assert_eq!(json, "\"ETHUSDT\"");
    }
}
