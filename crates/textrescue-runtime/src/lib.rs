//! Rescue orchestrator: extraction, bounded concurrent annotation, join.
//!
//! [`RescueAgent::rescue`] extracts every treasure from a text, annotates
//! each with a sentiment report through at most `max_concurrency` parallel
//! model calls, and returns them in extraction order. Any single failure
//! fails the whole rescue; [`RescueAgent::rescue_isolated`] reports failures
//! per treasure instead.

pub mod orchestrator;
pub mod types;

pub use orchestrator::RescueAgent;
pub use types::*;
