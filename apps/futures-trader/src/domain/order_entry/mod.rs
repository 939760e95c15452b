//! Order Entry Bounded Context
//!
//! Turns what the user typed into a validated [`OrderRequest`]. Nothing in
//! here talks to the exchange.

pub mod errors;
pub mod request;
pub mod value_objects;

pub use errors::OrderInputError;
pub use request::{OrderRequest, parse_positive_decimal};
pub use value_objects::{OrderSide, OrderType, Symbol, TimeInForce};
