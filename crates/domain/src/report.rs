//! Score report types.

use crate::metric::MetricName;
use serde::{Deserialize, Serialize};

/// Result of one scoring call.
///
/// The five sub-metrics are percentages in `[0, 100]`. `overall_score` is a
/// fraction in `[0, 1]`; multiply by 100 for display parity with the others.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    #[serde(rename = "Usability")]
    pub usability: f64,
    #[serde(rename = "Metadata")]
    pub metadata: f64,
    #[serde(rename = "Freshness")]
    pub freshness: f64,
    #[serde(rename = "Completeness")]
    pub completeness: f64,
    #[serde(rename = "Accessibility")]
    pub accessibility: f64,
    #[serde(rename = "Overall Score")]
    pub overall_score: f64,
}

impl ScoreReport {
    /// Stored value of a metric.
    pub fn get(&self, metric: MetricName) -> f64 {
        match metric {
            MetricName::Usability => self.usability,
            MetricName::Metadata => self.metadata,
            MetricName::Freshness => self.freshness,
            MetricName::Completeness => self.completeness,
            MetricName::Accessibility => self.accessibility,
            MetricName::OverallScore => self.overall_score,
        }
    }

    /// Value of a metric on the percentage scale.
    pub fn display_value(&self, metric: MetricName) -> f64 {
        if metric.is_fraction() {
            self.get(metric) * 100.0
        } else {
            self.get(metric)
        }
    }

    /// Overall score as a percentage.
    pub fn overall_percentage(&self) -> f64 {
        self.display_value(MetricName::OverallScore)
    }

    /// Stored values in report order.
    pub fn entries(&self) -> Vec<(MetricName, f64)> {
        MetricName::ALL.iter().map(|m| (*m, self.get(*m))).collect()
    }
}

/// The three proportions behind the usability score, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsabilityBreakdown {
    /// Columns whose trimmed name is non-empty
    pub meaningful_names: f64,
    /// Columns holding exactly one distinct value
    pub constant_columns: f64,
    /// Columns passing feature validation
    pub valid_features: f64,
}

impl UsabilityBreakdown {
    /// Mean of the three proportions.
    pub fn proportion(&self) -> f64 {
        (self.meaningful_names + self.constant_columns + self.valid_features) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScoreReport {
        ScoreReport {
            usability: 50.0,
            metadata: 70.0,
            freshness: 80.0,
            completeness: 100.0,
            accessibility: 100.0,
            overall_score: 0.7,
        }
    }

    #[test]
    fn test_entries_in_report_order() {
        let names: Vec<&str> = sample().entries().iter().map(|(m, _)| m.as_str()).collect();
        assert_eq!(
            names,
            vec!["Usability", "Metadata", "Freshness", "Completeness", "Accessibility", "Overall Score"]
        );
    }

    #[test]
    fn test_display_value_scales_overall_only() {
        let report = sample();
        assert_eq!(report.display_value(MetricName::Metadata), 70.0);
        assert!((report.overall_percentage() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_json_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 6);
        assert_eq!(object["Overall Score"], 0.7);
        assert_eq!(object["Freshness"], 80.0);
    }

    #[test]
    fn test_breakdown_proportion() {
        let breakdown = UsabilityBreakdown {
            meaningful_names: 1.0,
            constant_columns: 0.5,
            valid_features: 0.5,
        };
        assert!((breakdown.proportion() - 2.0 / 3.0).abs() < 1e-12);
    }
}
