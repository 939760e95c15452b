//! Domain Layer
//!
//! Order entry types with no infrastructure dependencies.
//!
//! # Bounded Contexts
//!
//! - [`order_entry`]: symbols, sides, order types and the validated order request

pub mod order_entry;
