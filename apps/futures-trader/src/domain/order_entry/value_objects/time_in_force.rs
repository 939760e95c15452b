//! Time in force for resting orders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Time in force specifying order validity duration.
///
/// Only good-till-canceled is ever sent by this client; the other policies
/// the exchange knows are not reachable from order entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Good-till-canceled: rests until filled or canceled.
    #[default]
    #[serde(rename = "GTC")]
    GoodTillCanceled,
}

impl TimeInForce {
    /// Wire representation used by the exchange.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoodTillCanceled => "GTC",
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_in_force_default_is_gtc() {
        assert_eq!(TimeInForce::default(), TimeInForce::GoodTillCanceled);
    }

    #[test]
    fn time_in_force_serde() {
        let json = serde_json::to_string(&TimeInForce::GoodTillCanceled).unwrap();
        assert_eq!(json, "\"GTC\"");
        assert_eq!(TimeInForce::GoodTillCanceled.to_string(), "GTC");
    }
}
