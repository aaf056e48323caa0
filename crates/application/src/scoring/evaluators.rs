//! Evaluator implementations for the quality metrics.
//!
//! Each evaluator turns a dataset into a proportion in `[0, 1]`. Only
//! usability and completeness are derived from the data; metadata,
//! freshness, accessibility and feature validity are placeholder constants
//! until real checks exist.

use dataquality_domain::{Column, Dataset, MetricName, ScoringError, UsabilityBreakdown};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Feature-validity proportion reported until real validation exists.
pub const PLACEHOLDER_VALID_FEATURES: f64 = 0.5;
/// Metadata proportion reported until publisher metadata is read.
pub const PLACEHOLDER_METADATA: f64 = 0.7;
/// Freshness proportion reported until refresh dates are compared.
pub const PLACEHOLDER_FRESHNESS: f64 = 0.8;
/// Accessibility proportion reported until the DataStore API is queried.
pub const PLACEHOLDER_ACCESSIBILITY: f64 = 1.0;

/// Evaluator trait for a single metric.
pub trait MetricEvaluator: Send + Sync {
    /// The metric this evaluator produces.
    fn metric(&self) -> MetricName;

    /// Evaluate the dataset, returning a proportion in `[0, 1]`.
    fn evaluate(&self, dataset: &Dataset) -> Result<f64, ScoringError>;
}

/// Decides the share of columns holding valid features.
pub trait FeatureValidator: Send + Sync {
    fn valid_proportion(&self, dataset: &Dataset) -> Result<f64, ScoringError>;
}

/// Feature validator returning a fixed proportion.
///
/// Real validation needs domain rules (for example coordinate ranges in
/// geospatial data) which are not modelled yet.
pub struct PlaceholderFeatureValidator;

impl FeatureValidator for PlaceholderFeatureValidator {
    fn valid_proportion(&self, _dataset: &Dataset) -> Result<f64, ScoringError> {
        Ok(PLACEHOLDER_VALID_FEATURES)
    }
}

/// Fraction of columns matching a predicate.
///
/// Fails with [`ScoringError::NoColumns`] on a dataset without columns.
pub fn column_proportion<F>(dataset: &Dataset, predicate: F) -> Result<f64, ScoringError>
where
    F: Fn(&Column) -> bool,
{
    let total = dataset.column_count();
    if total == 0 {
        return Err(ScoringError::NoColumns);
    }
    let matching = dataset.columns().iter().filter(|c| predicate(c)).count();
    Ok(matching as f64 / total as f64)
}

/// Usability: mean of the meaningful-name, constant-column and valid-feature
/// proportions.
pub struct UsabilityEvaluator {
    feature_validator: Arc<dyn FeatureValidator>,
}

impl UsabilityEvaluator {
    pub fn new(feature_validator: Arc<dyn FeatureValidator>) -> Self {
        Self { feature_validator }
    }

    /// Compute the three usability proportions.
    #[instrument(skip(self, dataset), fields(columns = dataset.column_count()))]
    pub fn breakdown(&self, dataset: &Dataset) -> Result<UsabilityBreakdown, ScoringError> {
        let meaningful_names = column_proportion(dataset, Column::has_meaningful_name)?;
        let constant_columns = column_proportion(dataset, Column::is_constant)?;
        let valid_features = self.feature_validator.valid_proportion(dataset)?;

        debug!(
            meaningful_names,
            constant_columns,
            valid_features,
            "Usability breakdown"
        );

        Ok(UsabilityBreakdown {
            meaningful_names,
            constant_columns,
            valid_features,
        })
    }
}

impl Default for UsabilityEvaluator {
    fn default() -> Self {
        Self::new(Arc::new(PlaceholderFeatureValidator))
    }
}

impl MetricEvaluator for UsabilityEvaluator {
    fn metric(&self) -> MetricName {
        MetricName::Usability
    }

    fn evaluate(&self, dataset: &Dataset) -> Result<f64, ScoringError> {
        Ok(self.breakdown(dataset)?.proportion())
    }
}

/// Completeness: share of cells that are not missing.
pub struct CompletenessEvaluator;

impl MetricEvaluator for CompletenessEvaluator {
    fn metric(&self) -> MetricName {
        MetricName::Completeness
    }

    #[instrument(skip(self, dataset))]
    fn evaluate(&self, dataset: &Dataset) -> Result<f64, ScoringError> {
        let total_cells = dataset.total_cells();
        if total_cells == 0 {
            return Err(ScoringError::EmptyDataset {
                rows: dataset.row_count(),
                columns: dataset.column_count(),
            });
        }

        let empty_cells = dataset.missing_cells();
        debug!(total_cells, empty_cells, "Counted missing cells");

        Ok((total_cells - empty_cells) as f64 / total_cells as f64)
    }
}

/// Metadata completeness placeholder.
pub struct MetadataEvaluator;

impl MetricEvaluator for MetadataEvaluator {
    fn metric(&self) -> MetricName {
        MetricName::Metadata
    }

    fn evaluate(&self, _dataset: &Dataset) -> Result<f64, ScoringError> {
        Ok(PLACEHOLDER_METADATA)
    }
}

/// Freshness placeholder.
pub struct FreshnessEvaluator;

impl MetricEvaluator for FreshnessEvaluator {
    fn metric(&self) -> MetricName {
        MetricName::Freshness
    }

    fn evaluate(&self, _dataset: &Dataset) -> Result<f64, ScoringError> {
        Ok(PLACEHOLDER_FRESHNESS)
    }
}

/// Accessibility placeholder.
pub struct AccessibilityEvaluator;

impl MetricEvaluator for AccessibilityEvaluator {
    fn metric(&self) -> MetricName {
        MetricName::Accessibility
    }

    fn evaluate(&self, _dataset: &Dataset) -> Result<f64, ScoringError> {
        Ok(PLACEHOLDER_ACCESSIBILITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataquality_testing::fixtures::*;

    #[test]
    fn test_usability_breakdown_example() {
        let breakdown = UsabilityEvaluator::default()
            .breakdown(&create_example_dataset())
            .unwrap();

        assert_eq!(breakdown.meaningful_names, 1.0);
        assert_eq!(breakdown.constant_columns, 0.5);
        assert_eq!(breakdown.valid_features, 0.5);
    }

    #[test]
    fn test_unnamed_columns() {
        let breakdown = UsabilityEvaluator::default()
            .breakdown(&create_unnamed_dataset())
            .unwrap();
        assert_eq!(breakdown.meaningful_names, 0.0);
    }

    #[test]
    fn test_completeness() {
        let value = CompletenessEvaluator.evaluate(&create_example_dataset()).unwrap();
        assert_eq!(value, 0.75);

        let value = CompletenessEvaluator.evaluate(&create_complete_dataset()).unwrap();
        assert_eq!(value, 1.0);
    }

    #[test]
    fn test_completeness_without_rows() {
        let err = CompletenessEvaluator
            .evaluate(&create_header_only_dataset())
            .unwrap_err();
        assert_eq!(err, ScoringError::EmptyDataset { rows: 0, columns: 2 });
    }

    #[test]
    fn test_column_proportion_without_columns() {
        let dataset = Dataset::default();
        assert_eq!(
            column_proportion(&dataset, |_| true),
            Err(ScoringError::NoColumns)
        );
    }

    #[test]
    fn test_placeholders_ignore_data() {
        for dataset in [create_example_dataset(), create_complete_dataset(), Dataset::default()] {
            assert_eq!(MetadataEvaluator.evaluate(&dataset).unwrap(), 0.7);
            assert_eq!(FreshnessEvaluator.evaluate(&dataset).unwrap(), 0.8);
            assert_eq!(AccessibilityEvaluator.evaluate(&dataset).unwrap(), 1.0);
        }
    }
}
