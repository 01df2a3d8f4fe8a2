//! Runtime types.

use serde::Serialize;
use textrescue_core::{AnalysisError, Fragment, FragmentKind};

/// Terminal output of a rescue.
#[derive(Debug, Clone, Serialize)]
pub struct RescueResult {
    /// Analyzed fragments in extraction order.
    #[serde(rename = "rescuedTreasures")]
    pub rescued_treasures: Vec<Fragment>,
    pub summary: String,
}

impl RescueResult {
    pub fn new(rescued_treasures: Vec<Fragment>) -> Self {
        let summary = format!(
            "Successfully analyzed {} elements from the text.",
            rescued_treasures.len()
        );
        Self {
            rescued_treasures,
            summary,
        }
    }
}

/// A fragment whose annotation failed.
#[derive(Debug, Clone, Serialize)]
pub struct FragmentFailure {
    pub id: String,
    pub kind: FragmentKind,
    pub text: String,
    /// Caller-facing message.
    pub error: String,
    /// Underlying reason (model failure, timeout, parse error).
    pub cause: String,
}

impl FragmentFailure {
    pub fn new(fragment: Fragment, err: &AnalysisError) -> Self {
        Self {
            id: fragment.id,
            kind: fragment.kind,
            text: fragment.text,
            error: err.to_string(),
            cause: err.cause().to_string(),
        }
    }
}

/// Result of a rescue with per-fragment error isolation.
#[derive(Debug, Clone, Serialize)]
pub struct PartialRescue {
    /// Successfully analyzed fragments, in extraction order.
    #[serde(rename = "rescuedTreasures")]
    pub rescued_treasures: Vec<Fragment>,
    /// Failed fragments, in extraction order.
    pub failures: Vec<FragmentFailure>,
    pub summary: String,
}

impl PartialRescue {
    pub fn new(rescued_treasures: Vec<Fragment>, failures: Vec<FragmentFailure>) -> Self {
        let total = rescued_treasures.len() + failures.len();
        let summary = format!(
            "Analyzed {} of {} elements from the text ({} failed).",
            rescued_treasures.len(),
            total,
            failures.len()
        );
        Self {
            rescued_treasures,
            failures,
            summary,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
