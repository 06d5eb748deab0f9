//! Item-count parsing and quote calculation.

pub mod common;
pub mod quote;

pub use quote::{QuoteCalculator, QuoteError, QuoteRates};
