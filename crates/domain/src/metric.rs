//! Metric names, weights and definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The named metrics in a score report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricName {
    Usability,
    Metadata,
    Freshness,
    Completeness,
    Accessibility,
    #[serde(rename = "Overall Score")]
    OverallScore,
}

impl MetricName {
    /// The five weighted sub-metrics, in report order.
    pub const SUB_METRICS: [MetricName; 5] = [
        MetricName::Usability,
        MetricName::Metadata,
        MetricName::Freshness,
        MetricName::Completeness,
        MetricName::Accessibility,
    ];

    /// Every metric in report order, ending with the overall score.
    pub const ALL: [MetricName; 6] = [
        MetricName::Usability,
        MetricName::Metadata,
        MetricName::Freshness,
        MetricName::Completeness,
        MetricName::Accessibility,
        MetricName::OverallScore,
    ];

    /// Display name used as the report key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usability => "Usability",
            Self::Metadata => "Metadata",
            Self::Freshness => "Freshness",
            Self::Completeness => "Completeness",
            Self::Accessibility => "Accessibility",
            Self::OverallScore => "Overall Score",
        }
    }

    /// Weight in the overall score. The weights of the sub-metrics sum to 1.
    pub fn weight(&self) -> Option<f64> {
        match self {
            Self::Usability => Some(0.38),
            Self::Metadata => Some(0.25),
            Self::Freshness => Some(0.18),
            Self::Completeness => Some(0.12),
            Self::Accessibility => Some(0.07),
            Self::OverallScore => None,
        }
    }

    /// Fixed end-user description of the metric.
    pub fn definition(&self) -> Option<&'static str> {
        match self {
            Self::Usability => Some(
                "Measures how easy it is to work with the data. It includes the proportion of columns with meaningful names, constant values, and valid features.",
            ),
            Self::Metadata => Some(
                "Indicates how well the data is described. It's measured by the percent of metadata fields that have been filled out by the publisher.",
            ),
            Self::Freshness => Some(
                "Reflects how close the data is to its creation date. It considers the time gap between the expected refresh rate and the actual refresh, and the gap between the last refresh and today.",
            ),
            Self::Completeness => Some(
                "Measures how much data is missing. It's calculated as the proportion of empty cells in the dataset.",
            ),
            Self::Accessibility => Some(
                "Assesses how easy it is to access the data. For this MVP, it checks whether the data can be accessed via the DataStore API.",
            ),
            Self::OverallScore => None,
        }
    }

    /// Whether the report stores this metric as a fraction rather than a
    /// percentage.
    pub fn is_fraction(&self) -> bool {
        matches!(self, Self::OverallScore)
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "usability" => Ok(Self::Usability),
            "metadata" => Ok(Self::Metadata),
            "freshness" => Ok(Self::Freshness),
            "completeness" => Ok(Self::Completeness),
            "accessibility" => Ok(Self::Accessibility),
            "overallscore" | "overall" => Ok(Self::OverallScore),
            _ => Err(format!("Unknown metric: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let total: f64 = MetricName::SUB_METRICS
            .iter()
            .filter_map(MetricName::weight)
            .sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!(MetricName::OverallScore.weight().is_none());
    }

    #[test]
    fn test_every_sub_metric_has_definition() {
        for metric in MetricName::SUB_METRICS {
            assert!(metric.definition().is_some(), "{} has no definition", metric);
        }
        assert!(MetricName::OverallScore.definition().is_none());
    }

    #[test]
    fn test_parse_metric_names() {
        assert_eq!("usability".parse::<MetricName>(), Ok(MetricName::Usability));
        assert_eq!("Overall Score".parse::<MetricName>(), Ok(MetricName::OverallScore));
        assert_eq!("overall_score".parse::<MetricName>(), Ok(MetricName::OverallScore));
        assert!("quality".parse::<MetricName>().is_err());
    }

    #[test]
    fn test_serialization_uses_report_keys() {
        assert_eq!(
            serde_json::to_string(&MetricName::OverallScore).unwrap(),
            "\"Overall Score\""
        );
        assert_eq!(serde_json::to_string(&MetricName::Metadata).unwrap(), "\"Metadata\"");
    }
}
