//! Configuration Infrastructure
//!
//! Environment-driven settings for the trader binary.

mod settings;

pub use settings::{ConfigError, DEFAULT_LOG_FILE, TraderConfig};
