//! textrescue sentiment: prompted sentiment annotation.
//!
//! Renders a fixed instructional prompt around the text, sends it to a
//! [`TextModel`], strips an optional ```` ```json ```` fence from the reply
//! and parses it into a [`textrescue_core::SentimentReport`]. The shipped
//! [`CannedModel`] simulates the model call; no network client is wired in.

pub mod analyzer;
pub mod model;
pub mod parse;
pub mod prompt;

pub use analyzer::SentimentAnalyzer;
pub use model::{CannedModel, ScriptedModel, TextModel};
