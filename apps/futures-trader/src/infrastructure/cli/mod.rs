//! Terminal Driver
//!
//! Prompts the user for orders and drives the place-order use case.

mod prompt;
mod session;

pub use prompt::Prompter;
pub use session::{SessionSummary, TradingSession, prompt_credentials};
