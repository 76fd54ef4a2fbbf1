//! Runtime layer for the aurora alert.
//!
//! Provides the fetch and delivery collaborators and the runner that wires
//! them around the extraction pipeline for a single invocation.

pub mod notifier;
pub mod orchestrator;
pub mod source;

#[cfg(test)]
mod test_server;

pub use aurora_core as core;
pub use aurora_data as data;
