//! Application Ports
//!
//! Ports define interfaces for interacting with external systems.
//! - **Driven Ports** (Secondary/Outbound): How our application uses external systems

mod exchange_port;

#[cfg(test)]
pub use exchange_port::MockFuturesExchangePort;
pub use exchange_port::{
    ExchangeError, ExchangeInfo, ExchangeOrderType, FuturesExchangePort, InstrumentInfo, OrderAck,
    OrderParams,
};
