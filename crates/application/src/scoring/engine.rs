//! Scoring engine - weighted aggregation of metric evaluators
//!
//! The scorer runs one evaluator per sub-metric in a fixed order, scales each
//! proportion to a percentage and folds them into the overall score using the
//! weights attached to [`MetricName`].

use crate::scoring::evaluators::{
    AccessibilityEvaluator, CompletenessEvaluator, FeatureValidator, FreshnessEvaluator,
    MetadataEvaluator, MetricEvaluator, PlaceholderFeatureValidator, UsabilityEvaluator,
};
use dataquality_common::ScoringConfig;
use dataquality_domain::{Dataset, MetricName, ScoreReport, ScoringError, UsabilityBreakdown};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// The main scorer
pub struct Scorer {
    config: ScoringConfig,
    evaluators: BTreeMap<MetricName, Arc<dyn MetricEvaluator>>,
    feature_validator: Arc<dyn FeatureValidator>,
}

impl Scorer {
    /// Create a scorer with the default evaluators
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_feature_validator(config, Arc::new(PlaceholderFeatureValidator))
    }

    fn with_feature_validator(
        config: ScoringConfig,
        feature_validator: Arc<dyn FeatureValidator>,
    ) -> Self {
        let mut scorer = Self {
            config,
            evaluators: BTreeMap::new(),
            feature_validator,
        };
        scorer.register_default_evaluators();
        scorer
    }

    fn register_default_evaluators(&mut self) {
        self.register_evaluator(Arc::new(UsabilityEvaluator::new(
            self.feature_validator.clone(),
        )));
        self.register_evaluator(Arc::new(MetadataEvaluator));
        self.register_evaluator(Arc::new(FreshnessEvaluator));
        self.register_evaluator(Arc::new(CompletenessEvaluator));
        self.register_evaluator(Arc::new(AccessibilityEvaluator));
    }

    /// Register an evaluator, replacing any existing one for the same metric.
    ///
    /// The overall score is always aggregated, so an evaluator claiming
    /// [`MetricName::OverallScore`] is ignored.
    pub fn register_evaluator(&mut self, evaluator: Arc<dyn MetricEvaluator>) {
        let metric = evaluator.metric();
        if metric.weight().is_none() {
            warn!(metric = %metric, "Ignoring evaluator for aggregated metric");
            return;
        }
        self.evaluators.insert(metric, evaluator);
    }

    /// Get the evaluator for a metric
    pub fn get_evaluator(&self, metric: MetricName) -> Option<Arc<dyn MetricEvaluator>> {
        self.evaluators.get(&metric).cloned()
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a dataset
    ///
    /// Evaluators run in report order and the first failure aborts scoring.
    #[instrument(skip(self, dataset), fields(rows = dataset.row_count(), columns = dataset.column_count()))]
    pub fn score(&self, dataset: &Dataset) -> Result<ScoreReport, ScoringError> {
        if dataset.column_count() == 0 {
            return Err(ScoringError::NoColumns);
        }

        if self.config.detailed_breakdown {
            let breakdown = self.usability_breakdown(dataset)?;
            debug!(?breakdown, "Usability breakdown");
        }

        let mut percentages = [0.0; MetricName::SUB_METRICS.len()];
        for (slot, metric) in percentages.iter_mut().zip(MetricName::SUB_METRICS) {
            *slot = self.evaluate_metric(metric, dataset)? * 100.0;
        }

        let overall_score = MetricName::SUB_METRICS
            .iter()
            .zip(percentages)
            .map(|(metric, pct)| pct * metric.weight().unwrap_or(0.0))
            .sum::<f64>()
            / 100.0;

        let [usability, metadata, freshness, completeness, accessibility] = percentages;
        let report = ScoreReport {
            usability,
            metadata,
            freshness,
            completeness,
            accessibility,
            overall_score,
        };

        info!(overall_score, "Scoring complete");

        Ok(report)
    }

    /// The three proportions behind the usability score.
    pub fn usability_breakdown(
        &self,
        dataset: &Dataset,
    ) -> Result<UsabilityBreakdown, ScoringError> {
        UsabilityEvaluator::new(self.feature_validator.clone()).breakdown(dataset)
    }

    fn evaluate_metric(&self, metric: MetricName, dataset: &Dataset) -> Result<f64, ScoringError> {
        let evaluator = self
            .get_evaluator(metric)
            .ok_or_else(|| ScoringError::Evaluator {
                metric,
                message: "no evaluator registered".to_string(),
            })?;

        let proportion = evaluator.evaluate(dataset)?;
        if !proportion.is_finite() || !(0.0..=1.0).contains(&proportion) {
            return Err(ScoringError::Evaluator {
                metric,
                message: format!("proportion {} outside [0, 1]", proportion),
            });
        }

        debug!(metric = %metric, proportion, "Evaluated metric");
        Ok(proportion)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// Builder for the scorer
pub struct ScorerBuilder {
    config: ScoringConfig,
    feature_validator: Option<Arc<dyn FeatureValidator>>,
    custom_evaluators: Vec<Arc<dyn MetricEvaluator>>,
}

impl ScorerBuilder {
    pub fn new() -> Self {
        Self {
            config: ScoringConfig::default(),
            feature_validator: None,
            custom_evaluators: Vec::new(),
        }
    }

    pub fn config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    pub fn detailed_breakdown(mut self, enabled: bool) -> Self {
        self.config.detailed_breakdown = enabled;
        self
    }

    /// Replace the feature validator used for the usability score.
    pub fn feature_validator(mut self, validator: Arc<dyn FeatureValidator>) -> Self {
        self.feature_validator = Some(validator);
        self
    }

    /// Replace the default evaluator for `evaluator.metric()`.
    pub fn evaluator(mut self, evaluator: Arc<dyn MetricEvaluator>) -> Self {
        self.custom_evaluators.push(evaluator);
        self
    }

    pub fn build(self) -> Scorer {
        let feature_validator = self
            .feature_validator
            .unwrap_or_else(|| Arc::new(PlaceholderFeatureValidator));
        let mut scorer = Scorer::with_feature_validator(self.config, feature_validator);
        for evaluator in self.custom_evaluators {
            scorer.register_evaluator(evaluator);
        }
        scorer
    }
}

impl Default for ScorerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
