//! Exchange Adapters
//!
//! Implementations of `FuturesExchangePort` for futures exchanges.

pub mod binance;

pub use binance::{BinanceConfig, BinanceError, BinanceFuturesAdapter, Credentials, ExchangeEnvironment};
