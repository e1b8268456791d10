//! Pricing module - stay-length price tiering.

mod pricing_constants;
mod pricing_engine;
mod pricing_engine_tests;

// Re-export the public interface
pub use pricing_constants::*;
pub use pricing_engine::{calculate_dynamic_price, repriced};
