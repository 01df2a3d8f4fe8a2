//! textrescue core: fragment and sentiment data model, errors, configuration.

pub mod config;
pub mod error;
pub mod fragment;
pub mod sentiment;

pub use config::RescueConfig;
pub use error::{
    AnalysisError, AnalysisFailure, Error, ModelError, Result, ANALYSIS_FAILED_MESSAGE,
};
pub use fragment::{Analysis, Fragment, FragmentKind, FragmentState, ANALYZED_PREFIX};
pub use sentiment::{DominantEmotion, Emotion, MoodPoint, SentimentReport, Tone};
