//! Shared domain types for the aurora forecast alert.
//!
//! Holds the forecast table model, the error taxonomy, the alert decision
//! and notification payload, and the command-line settings.

pub mod alert;
pub mod error;
pub mod models;
pub mod notifications;
pub mod settings;

pub use error::{Anchor, ForecastError, Result};
