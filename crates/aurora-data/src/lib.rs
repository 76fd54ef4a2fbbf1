//! Forecast-table extraction for the aurora alert.
//!
//! Turns the raw bulletin text into a ranked list of Kp forecast slots:
//! anchor-based table location, annotation stripping, header inference,
//! whitespace-table parsing, wide-to-long reshaping and ranking. Every stage
//! is a pure function over in-memory text.

pub mod analysis;
pub mod header;
pub mod locator;
pub mod parser;
pub mod ranking;
pub mod reshape;
pub mod sanitizer;

pub use aurora_core as core;
