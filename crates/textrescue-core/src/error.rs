//! Error types for textrescue.

use std::time::Duration;

use thiserror::Error;

/// Message every caller sees when sentiment analysis fails, whatever the cause.
pub const ANALYSIS_FAILED_MESSAGE: &str = "The model could not analyze the sentiment correctly.";

#[derive(Error, Debug)]
pub enum Error {
    /// Reserved for malformed input; the extractor never raises it today.
    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file exists but could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for its schema.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by a text-generation model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Model unavailable: {0}")]
    Unavailable(String),

    #[error("Model has no replies left")]
    Exhausted,
}

/// Why a sentiment analysis failed.
#[derive(Error, Debug)]
pub enum AnalysisFailure {
    #[error("model call failed: {0}")]
    Model(#[from] ModelError),

    #[error("model call exceeded {0:?}")]
    Timeout(Duration),

    #[error("model reply is not a valid sentiment report: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Sentiment analysis failure.
///
/// Displays the stable [`ANALYSIS_FAILED_MESSAGE`]. The underlying
/// [`AnalysisFailure`] is reachable through [`AnalysisError::cause`] and
/// [`std::error::Error::source`].
#[derive(Error, Debug)]
#[error("{}", ANALYSIS_FAILED_MESSAGE)]
pub struct AnalysisError {
    #[source]
    cause: AnalysisFailure,
}

impl AnalysisError {
    pub fn new(cause: impl Into<AnalysisFailure>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    pub fn cause(&self) -> &AnalysisFailure {
        &self.cause
    }
}

impl From<AnalysisFailure> for AnalysisError {
    fn from(cause: AnalysisFailure) -> Self {
        Self { cause }
    }
}
