//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod place_order;

pub use place_order::{PlaceOrderUseCase, SubmissionOutcome};
