//! Text-generation model seam.
//!
//! The `TextModel` trait abstracts over the model that answers the sentiment
//! prompt. Implementations:
//! - `CannedModel`: simulated call, fixed latency, fixed fenced reply
//! - `ScriptedModel`: queued replies with prompt recording, for tests and demos

use std::collections::VecDeque;
use std::time::Duration;

use futures::future::BoxFuture;
use parking_lot::Mutex;
use textrescue_core::{ModelError, SentimentReport};
use tracing::debug;

use crate::prompt::EXAMPLE_REPORT_JSON;

/// Trait for prompt-in, text-out model backends.
pub trait TextModel: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Send one rendered prompt and return the raw reply.
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ModelError>>;
}

/// Simulated model: waits `latency`, then returns the canned report in a
/// ```` ```json ```` fence.
#[derive(Debug, Clone)]
pub struct CannedModel {
    latency: Duration,
}

impl CannedModel {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// The reply every call returns.
    pub fn reply() -> String {
        format!("```json\n{}\n```", EXAMPLE_REPORT_JSON)
    }

    /// The report encoded in [`CannedModel::reply`].
    pub fn report() -> SentimentReport {
        serde_json::from_str(EXAMPLE_REPORT_JSON).expect("canned report is valid")
    }
}

impl Default for CannedModel {
    fn default() -> Self {
        Self::new(Duration::from_millis(textrescue_core::config::DEFAULT_SIMULATED_LATENCY_MS))
    }
}

impl TextModel for CannedModel {
    fn name(&self) -> &str {
        "canned"
    }

    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ModelError>> {
        Box::pin(async move {
            debug!("Canned model received prompt ({} bytes)", prompt.len());
            tokio::time::sleep(self.latency).await;
            Ok(Self::reply())
        })
    }
}

/// Model that replays queued replies in call order.
///
/// Once the queue is drained it repeats the fallback reply if one is set,
/// otherwise fails with [`ModelError::Exhausted`]. Every prompt is recorded.
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, ModelError>>>,
    fallback: Option<String>,
    delay: Duration,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = Result<S, ModelError>>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| r.map(Into::into)).collect()),
            fallback: None,
            delay: Duration::ZERO,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always answer with `reply`.
    pub fn repeating(reply: impl Into<String>) -> Self {
        Self::new(std::iter::empty::<Result<String, ModelError>>()).with_fallback(reply)
    }

    pub fn with_fallback(mut self, reply: impl Into<String>) -> Self {
        self.fallback = Some(reply.into());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().len()
    }

    fn next_reply(&self, prompt: &str) -> Result<String, ModelError> {
        self.prompts.lock().push(prompt.to_string());
        match self.replies.lock().pop_front() {
            Some(reply) => reply,
            None => self.fallback.clone().ok_or(ModelError::Exhausted),
        }
    }
}

impl TextModel for ScriptedModel {
    fn name(&self) -> &str {
        "scripted"
    }

    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ModelError>> {
        let reply = self.next_reply(prompt);
        Box::pin(async move {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            reply
        })
    }
}
