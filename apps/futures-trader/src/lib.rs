// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Futures Trader - Order Entry Library
//!
//! Interactive order entry for the Binance USD-M Futures testnet.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Order entry rules
//!   - `order_entry`: Symbol, side, order type and the validated `OrderRequest`
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `FuturesExchangePort`
//!   - `use_cases`: `PlaceOrderUseCase` (validate symbol, build params, submit once)
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `exchange`: Binance futures adapter
//!   - `cli`: Interactive terminal session
//!   - `config`: Environment settings
//!   - `telemetry`: Log file sink

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Error taxonomy surfaced to the user.
pub mod error;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::order_entry::{
    OrderInputError, OrderRequest, OrderSide, OrderType, Symbol, TimeInForce,
};

// Application re-exports
pub use application::ports::{
    ExchangeError, ExchangeInfo, ExchangeOrderType, FuturesExchangePort, OrderAck, OrderParams,
};
pub use application::use_cases::{PlaceOrderUseCase, SubmissionOutcome};

// Infrastructure re-exports
pub use infrastructure::config::{ConfigError, TraderConfig};
pub use infrastructure::exchange::binance::{
    BinanceConfig, BinanceError, BinanceFuturesAdapter, Credentials, ExchangeEnvironment,
};

pub use error::TradeError;
