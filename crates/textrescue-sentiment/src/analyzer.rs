//! Sentiment analyzer: render prompt, call the model, parse the reply.

use std::sync::Arc;
use std::time::Duration;

use textrescue_core::config::DEFAULT_CALL_TIMEOUT_SECS;
use textrescue_core::{AnalysisError, AnalysisFailure, RescueConfig, SentimentReport};
use tracing::{debug, error, warn};

use crate::model::{CannedModel, TextModel};
use crate::{parse, prompt};

/// Annotates text with a [`SentimentReport`] obtained from a [`TextModel`].
#[derive(Clone)]
pub struct SentimentAnalyzer {
    model: Arc<dyn TextModel>,
    call_timeout: Duration,
}

impl SentimentAnalyzer {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self {
            model,
            call_timeout: Duration::from_secs(DEFAULT_CALL_TIMEOUT_SECS),
        }
    }

    /// Canned model with the configured latency and timeout.
    pub fn from_config(config: &RescueConfig) -> Self {
        Self::new(Arc::new(CannedModel::new(config.simulated_latency())))
            .with_timeout(config.call_timeout())
    }

    pub fn with_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn call_timeout(&self) -> Duration {
        self.call_timeout
    }

    /// Analyze `text`.
    ///
    /// Any model failure, timeout or unparseable reply is reported as an
    /// [`AnalysisError`]; the specific cause is logged and kept as its source.
    /// Scores are returned as the model sent them, without clamping.
    pub async fn analyze_sentiment(&self, text: &str) -> Result<SentimentReport, AnalysisError> {
        let prompt = prompt::render(text);
        match self.request(&prompt).await {
            Ok(report) => {
                let violations = report.range_violations();
                if !violations.is_empty() {
                    warn!(
                        model = self.model.name(),
                        "Sentiment report has out-of-range fields: {}",
                        violations.join(", ")
                    );
                }
                Ok(report)
            }
            Err(cause) => {
                error!(model = self.model.name(), "Failed to analyze sentiment: {}", cause);
                Err(AnalysisError::new(cause))
            }
        }
    }

    async fn request(&self, prompt: &str) -> Result<SentimentReport, AnalysisFailure> {
        debug!(
            model = self.model.name(),
            prompt_len = prompt.len(),
            "Sending sentiment prompt"
        );
        let reply = tokio::time::timeout(self.call_timeout, self.model.generate(prompt))
            .await
            .map_err(|_| AnalysisFailure::Timeout(self.call_timeout))??;
        Ok(parse::parse_reply(&reply)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScriptedModel;
    use crate::prompt::EXAMPLE_REPORT_JSON;
    use textrescue_core::{Emotion, ModelError, Tone, ANALYSIS_FAILED_MESSAGE};

    fn analyzer(model: ScriptedModel) -> (SentimentAnalyzer, Arc<ScriptedModel>) {
        let model = Arc::new(model);
        (SentimentAnalyzer::new(model.clone()), model)
    }

    #[tokio::test]
    async fn test_canned_model_result() {
        let config = RescueConfig {
            simulated_latency_ms: 1,
            ..Default::default()
        };
        let analysis = SentimentAnalyzer::from_config(&config)
            .analyze_sentiment("This is a test text.")
            .await
            .unwrap();

        assert_eq!(analysis.overall_tone, Tone::Negative);
        assert_eq!(analysis.emotional_intensity, 85.0);
        assert_eq!(analysis.dominant_emotions.len(), 2);
        assert_eq!(analysis.dominant_emotions[0].emotion, Emotion::Anger);
        assert_eq!(
            analysis.dominant_emotions[0].text_evidence,
            vec!["رائع، لقد أضعت مفاتيحي مرة أخرى"]
        );
        assert_eq!(analysis.psychological_depth, 60.0);
    }

    #[tokio::test]
    async fn test_invalid_json_reply() {
        let (analyzer, _) = analyzer(ScriptedModel::repeating("this is not valid json"));
        let err = analyzer.analyze_sentiment("another test").await.unwrap_err();
        assert_eq!(err.to_string(), ANALYSIS_FAILED_MESSAGE);
        assert_eq!(
            err.to_string(),
            "The model could not analyze the sentiment correctly."
        );
        assert!(matches!(err.cause(), AnalysisFailure::Parse(_)));
    }

    #[tokio::test]
    async fn test_bare_and_fenced_replies_agree() {
        let (analyzer, _) = analyzer(ScriptedModel::new(vec![
            Ok::<_, ModelError>(EXAMPLE_REPORT_JSON.to_string()),
            Ok(format!("```json\n{}\n```", EXAMPLE_REPORT_JSON)),
        ]));
        let bare = analyzer.analyze_sentiment("t").await.unwrap();
        let fenced = analyzer.analyze_sentiment("t").await.unwrap();
        assert_eq!(bare, fenced);
        assert_eq!(bare, CannedModel::report());
    }

    #[tokio::test]
    async fn test_prompt_carries_text() {
        let (analyzer, model) = analyzer(ScriptedModel::repeating(CannedModel::reply()));
        analyzer
            .analyze_sentiment("Meanwhile, the ship sank.")
            .await
            .unwrap();
        let prompts = model.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Meanwhile, the ship sank."));
    }

    #[tokio::test]
    async fn test_model_failure_is_analysis_error() {
        let (analyzer, _) = analyzer(ScriptedModel::new(vec![Err::<String, _>(
            ModelError::Unavailable("quota".into()),
        )]));
        let err = analyzer.analyze_sentiment("t").await.unwrap_err();
        assert_eq!(err.to_string(), ANALYSIS_FAILED_MESSAGE);
        assert!(matches!(
            err.cause(),
            AnalysisFailure::Model(ModelError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_slow_model_times_out() {
        let model =
            ScriptedModel::repeating(CannedModel::reply()).with_delay(Duration::from_secs(5));
        let analyzer =
            SentimentAnalyzer::new(Arc::new(model)).with_timeout(Duration::from_millis(20));
        let err = analyzer.analyze_sentiment("t").await.unwrap_err();
        assert_eq!(err.to_string(), ANALYSIS_FAILED_MESSAGE);
        assert!(matches!(
            err.cause(),
            AnalysisFailure::Timeout(d) if *d == Duration::from_millis(20)
        ));
    }

    #[tokio::test]
    async fn test_out_of_range_scores_pass_through() {
        let reply = r#"{"overallTone": "mixed", "emotionalIntensity": 140,
            "dominantEmotions": [], "moodProgression": [], "psychologicalDepth": -5}"#;
        let (analyzer, _) = analyzer(ScriptedModel::repeating(reply));
        let report = analyzer.analyze_sentiment("t").await.unwrap();
        assert_eq!(report.emotional_intensity, 140.0);
        assert_eq!(report.psychological_depth, -5.0);
    }
}
