//! Infrastructure Layer
//!
//! This module contains the adapters for the ports defined in the
//! application layer. Following hexagonal architecture:
//!
//! - **Driven Adapters (Outbound)**: Implement ports for external systems
//!   - `exchange/`: Futures exchange adapters (Binance)
//!
//! - **Driver Adapters (Inbound)**: Expose the application to the user
//!   - `cli/`: Interactive terminal session
//!
//! - **Cross-cutting**
//!   - `config/`: Environment-driven settings
//!   - `telemetry/`: Log sink

pub mod cli;
pub mod config;
pub mod exchange;
pub mod telemetry;
