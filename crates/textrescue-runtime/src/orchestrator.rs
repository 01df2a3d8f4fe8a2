//! Rescue agent: extract treasures, annotate them concurrently, join.

use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use textrescue_core::{AnalysisError, Fragment, RescueConfig, Result};
use textrescue_extract::Extractor;
use textrescue_sentiment::{SentimentAnalyzer, TextModel};
use tracing::{debug, info, warn};

use crate::types::{FragmentFailure, PartialRescue, RescueResult};

/// Top-level agent that runs the rescue pipeline.
pub struct RescueAgent {
    extractor: Extractor,
    analyzer: SentimentAnalyzer,
    max_concurrency: usize,
}

impl RescueAgent {
    /// Agent backed by the canned model.
    pub fn new(config: &RescueConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(
            Extractor::new(),
            SentimentAnalyzer::from_config(config),
            config.max_concurrency,
        ))
    }

    /// Agent backed by `model`.
    pub fn with_model(config: &RescueConfig, model: Arc<dyn TextModel>) -> Result<Self> {
        config.validate()?;
        let analyzer = SentimentAnalyzer::new(model).with_timeout(config.call_timeout());
        Ok(Self::from_parts(Extractor::new(), analyzer, config.max_concurrency))
    }

    fn from_parts(
        extractor: Extractor,
        analyzer: SentimentAnalyzer,
        max_concurrency: usize,
    ) -> Self {
        info!(
            "RescueAgent initialized: model={}, max_concurrency={}, call_timeout={:?}",
            analyzer.model_name(),
            max_concurrency,
            analyzer.call_timeout()
        );
        Self {
            extractor,
            analyzer,
            max_concurrency: max_concurrency.max(1),
        }
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    pub fn analyzer(&self) -> &SentimentAnalyzer {
        &self.analyzer
    }

    /// Annotate one fragment, taking ownership of it for the duration.
    async fn analyze(
        &self,
        mut fragment: Fragment,
    ) -> std::result::Result<Fragment, (Fragment, AnalysisError)> {
        debug!("Analyzing treasure: {}", fragment.id);
        match self.analyzer.analyze_sentiment(&fragment.text).await {
            Ok(sentiment) => {
                fragment.attach_sentiment(sentiment);
                Ok(fragment)
            }
            Err(e) => Err((fragment, e)),
        }
    }

    /// Extract all treasures and analyze them.
    ///
    /// At most `max_concurrency` model calls are in flight. Output keeps
    /// extraction order. The first failure aborts the whole call and drops
    /// the calls still in flight.
    pub async fn extract_and_analyze(&self, text: &str) -> Result<Vec<Fragment>> {
        let fragments = self.extractor.extract_all(text);
        info!("Found {} treasures to analyze", fragments.len());

        let analyzed = stream::iter(fragments)
            .map(|fragment| self.analyze(fragment))
            .buffered(self.max_concurrency)
            .map_err(|(fragment, e)| {
                warn!("Aborting rescue: treasure {} failed: {}", fragment.id, e.cause());
                e
            })
            .try_collect::<Vec<_>>()
            .await?;

        Ok(analyzed)
    }

    /// Run the full rescue. Fails as a whole if any treasure fails.
    pub async fn rescue(&self, text: &str) -> Result<RescueResult> {
        info!("Starting rescue operation");
        let treasures = self.extract_and_analyze(text).await?;
        info!("Rescue operation complete: {} treasures", treasures.len());
        Ok(RescueResult::new(treasures))
    }

    /// Run the rescue with per-treasure error isolation.
    ///
    /// Every treasure is attempted; successes and failures are reported
    /// separately, each list in extraction order.
    pub async fn rescue_isolated(&self, text: &str) -> PartialRescue {
        let fragments = self.extractor.extract_all(text);
        info!("Starting isolated rescue of {} treasures", fragments.len());

        let outcomes: Vec<_> = stream::iter(fragments)
            .map(|fragment| self.analyze(fragment))
            .buffered(self.max_concurrency)
            .collect()
            .await;

        let mut analyzed = Vec::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(fragment) => analyzed.push(fragment),
                Err((fragment, e)) => {
                    warn!("Treasure {} failed: {}", fragment.id, e.cause());
                    failures.push(FragmentFailure::new(fragment, &e));
                }
            }
        }

        let result = PartialRescue::new(analyzed, failures);
        info!("Isolated rescue complete: {}", result.summary);
        result
    }
}
