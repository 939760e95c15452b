//! The order a user asked for, validated but not yet mapped to exchange fields.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::OrderInputError;
use super::value_objects::{OrderSide, OrderType, Symbol};

/// A single order request.
///
/// Invariant: `price` is present iff the type is LIMIT or STOP_LIMIT, and
/// `stop_price` is present iff the type is STOP_LIMIT. Quantity and any price
/// are strictly positive. The constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    symbol: Symbol,
    side: OrderSide,
    order_type: OrderType,
    quantity: Decimal,
    price: Option<Decimal>,
    stop_price: Option<Decimal>,
}

impl OrderRequest {
    /// Build a request for any order type, checking the price invariants.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNumericInput` if quantity or a price is not positive,
    /// or if a price is missing or present contrary to the order type.
    pub fn new(
        symbol: Symbol,
        side: OrderSide,
        order_type: OrderType,
        quantity: Decimal,
        price: Option<Decimal>,
        stop_price: Option<Decimal>,
    ) -> Result<Self, OrderInputError> {
        ensure_positive("quantity", quantity)?;
        let price = expect_field("price", price, order_type.requires_limit_price(), order_type)?;
        let stop_price = expect_field(
            "stop price",
            stop_price,
            order_type.requires_stop_price(),
            order_type,
        )?;

        Ok(Self {
            symbol,
            side,
            order_type,
            quantity,
            price,
            stop_price,
        })
    }

    /// Create a market order request.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNumericInput` if quantity is not positive.
    pub fn market(
        symbol: Symbol,
        side: OrderSide,
        quantity: Decimal,
    ) -> Result<Self, OrderInputError> {
        Self::new(symbol, side, OrderType::Market, quantity, None, None)
    }

    /// Create a limit order request.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNumericInput` if quantity or price is not positive.
    pub fn limit(
        symbol: Symbol,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Self, OrderInputError> {
        Self::new(symbol, side, OrderType::Limit, quantity, Some(price), None)
    }

    /// Create a stop-limit order request.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNumericInput` if quantity or either price is not positive.
    pub fn stop_limit(
        symbol: Symbol,
        side: OrderSide,
        quantity: Decimal,
        stop_price: Decimal,
        price: Decimal,
    ) -> Result<Self, OrderInputError> {
        Self::new(
            symbol,
            side,
            OrderType::StopLimit,
            quantity,
            Some(price),
            Some(stop_price),
        )
    }

    /// Contract symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Order side.
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        self.side
    }

    /// Order type chosen by the user.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Order quantity in contracts.
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Limit price, for LIMIT and STOP_LIMIT.
    #[must_use]
    pub const fn price(&self) -> Option<Decimal> {
        self.price
    }

    /// Trigger price, for STOP_LIMIT.
    #[must_use]
    pub const fn stop_price(&self) -> Option<Decimal> {
        self.stop_price
    }
}

/// Parse a strictly positive decimal typed by the user.
///
/// # Errors
///
/// Returns `InvalidNumericInput` naming `field` if the input is not a number
/// or is zero or negative.
pub fn parse_positive_decimal(field: &'static str, input: &str) -> Result<Decimal, OrderInputError> {
    let trimmed = input.trim();
    // `Decimal::from_str` skips `_` as a digit separator.
    if trimmed.contains('_') {
        return Err(OrderInputError::numeric(field, trimmed, "please enter a number"));
    }
    let value = Decimal::from_str(trimmed)
        .map_err(|_| OrderInputError::numeric(field, trimmed, "please enter a number"))?;
    ensure_positive(field, value)?;
    Ok(value)
}

fn ensure_positive(field: &'static str, value: Decimal) -> Result<(), OrderInputError> {
    if value > Decimal::ZERO {
        Ok(())
    } else {
        Err(OrderInputError::numeric(
            field,
            value.to_string(),
            "must be greater than zero",
        ))
    }
}

fn expect_field(
    field: &'static str,
    value: Option<Decimal>,
    required: bool,
    order_type: OrderType,
) -> Result<Option<Decimal>, OrderInputError> {
    match (value, required) {
        (Some(v), true) => {
            ensure_positive(field, v)?;
            Ok(Some(v))
        }
        (None, false) => Ok(None),
        (None, true) => Err(OrderInputError::numeric(
            field,
            "",
            &format!("required for {order_type} orders"),
        )),
        (Some(v), false) => Err(OrderInputError::numeric(
            field,
            v.to_string(),
            &format!("not accepted for {order_type} orders"),
        )),
    }
}
