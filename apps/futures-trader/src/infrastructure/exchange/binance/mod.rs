//! Binance USD-M Futures Adapter
//!
//! Implementation of `FuturesExchangePort` for the Binance futures REST API:
//! - Public instrument lookup (`exchangeInfo`)
//! - HMAC-SHA256 signed order creation, one attempt per order
//! - Environment-aware base URL (TESTNET vs PRODUCTION)

mod adapter;
mod api_types;
mod config;
mod error;
mod http_client;
mod signer;

pub use adapter::BinanceFuturesAdapter;
pub use config::{BinanceConfig, Credentials, DEFAULT_RECV_WINDOW_MS, ExchangeEnvironment};
pub use error::BinanceError;
