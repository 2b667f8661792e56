//! Aggregate statistics over conversation metrics.
//!
//! Aggregation filters each duration field independently: a value that
//! is absent, negative, or above the configured threshold is skipped
//! for that field only, and the record itself is never rewritten. When
//! nothing qualifies the result is `None` rather than a row of zeros,
//! because "no data" and "instant response" must stay distinguishable.

use super::types::{ConversationMetric, UploadPayload};

/// The duration fields tracked by the summary statistics.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DurationField {
    /// Seconds until the assistant's first reply.
    FirstResponse,
    /// Seconds until the recommendation reply.
    Recommendation,
}

impl DurationField {
    /// Every tracked field, in display order.
    pub const ALL: [Self; 2] = [Self::FirstResponse, Self::Recommendation];

    /// Raw value of this field on a metric record.
    #[must_use]
    pub const fn value_of(self, metric: &ConversationMetric) -> Option<f64> {
        match self {
            Self::FirstResponse => metric.time_to_first_response,
            Self::Recommendation => metric.time_to_recommendation,
        }
    }

    /// Human-readable label used by renderers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstResponse => "Time to first response",
            Self::Recommendation => "Time to recommendation",
        }
    }
}

/// Aggregate statistics for one duration field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AggregateStats {
    /// Number of records that qualified for this field.
    pub count: usize,
    /// Mean of the qualifying values, in seconds.
    pub average: f64,
    /// Smallest qualifying value, in seconds.
    pub min: f64,
    /// Largest qualifying value, in seconds.
    pub max: f64,
}

/// Aggregates for every tracked field. A `None` slot means no value
/// qualified for that field.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MetricAggregates {
    /// Stats for [`DurationField::FirstResponse`].
    pub first_response: Option<AggregateStats>,
    /// Stats for [`DurationField::Recommendation`].
    pub recommendation: Option<AggregateStats>,
}

impl MetricAggregates {
    /// Stats slot for `field`.
    #[must_use]
    pub const fn get(&self, field: DurationField) -> Option<AggregateStats> {
        match field {
            DurationField::FirstResponse => self.first_response,
            DurationField::Recommendation => self.recommendation,
        }
    }
}

/// Compute stats for a single duration field.
///
/// Values that are absent, negative, or strictly above `max_reasonable`
/// seconds are skipped; a value exactly equal to the threshold counts.
/// Returns `None` when no value qualified.
#[must_use]
pub fn aggregate_field(
    metrics: &[ConversationMetric],
    field: DurationField,
    max_reasonable: f64,
) -> Option<AggregateStats> {
    let mut count = 0usize;
    let mut sum = 0.0_f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for metric in metrics {
        let Some(value) = field.value_of(metric) else {
            continue;
        };
        // Negative durations are malformed input, not fast responses.
        if value < 0.0 || value > max_reasonable {
            continue;
        }
        count += 1;
        sum += value;
        min = min.min(value);
        max = max.max(value);
    }

    (count > 0).then(|| AggregateStats {
        count,
        average: sum / count as f64,
        min,
        max,
    })
}

/// Compute stats for every tracked field independently.
#[must_use]
pub fn aggregate(metrics: &[ConversationMetric], max_reasonable: f64) -> MetricAggregates {
    MetricAggregates {
        first_response: aggregate_field(metrics, DurationField::FirstResponse, max_reasonable),
        recommendation: aggregate_field(metrics, DurationField::Recommendation, max_reasonable),
    }
}

/// The numbers the dashboard's summary view displays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryReport {
    /// Conversations found in the export.
    pub conversation_count: u64,
    /// Per-field duration aggregates.
    pub aggregates: MetricAggregates,
    /// `matched/total` persona ratio, when persona data was present.
    pub persona_ratio: Option<String>,
}

impl SummaryReport {
    /// Build the summary for a payload, excluding outliers above
    /// `max_reasonable` seconds.
    #[must_use]
    pub fn compute(payload: &UploadPayload, max_reasonable: f64) -> Self {
        let persona_ratio = payload.persona_summary.as_ref().map(|summary| {
            format!(
                "{}/{}",
                summary.matched_conversations, payload.conversation_count
            )
        });
        Self {
            conversation_count: payload.conversation_count,
            aggregates: aggregate(&payload.metrics, max_reasonable),
            persona_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::PersonaSummary;

    fn metric(first: Option<f64>, recommendation: Option<f64>) -> ConversationMetric {
        ConversationMetric {
            time_to_first_response: first,
            time_to_recommendation: recommendation,
            ..ConversationMetric::default()
        }
    }

    #[test]
    fn test_outliers_above_threshold_are_excluded() {
        let metrics = vec![metric(Some(2.0), None), metric(Some(9999.0), None)];

        let stats = aggregate_field(&metrics, DurationField::FirstResponse, 300.0);

        assert_eq!(
            stats,
            Some(AggregateStats {
                count: 1,
                average: 2.0,
                min: 2.0,
                max: 2.0,
            })
        );
    }

    #[test]
    fn test_value_equal_to_threshold_is_included() {
        let metrics = vec![metric(Some(300.0), None)];

        let stats = aggregate_field(&metrics, DurationField::FirstResponse, 300.0);

        assert_eq!(stats.map(|s| s.count), Some(1));
        assert_eq!(stats.map(|s| s.max), Some(300.0));
    }

    #[test]
    fn test_negative_values_are_skipped() {
        let metrics = vec![metric(Some(-1.0), None), metric(Some(4.0), None)];

        let stats = aggregate_field(&metrics, DurationField::FirstResponse, 300.0);

        assert_eq!(stats.map(|s| s.count), Some(1));
        assert_eq!(stats.map(|s| s.average), Some(4.0));
    }

    #[test]
    fn test_no_qualifying_values_yields_none() {
        let absent = vec![metric(None, None)];
        let all_outliers = vec![metric(Some(500.0), None)];

        assert_eq!(
            aggregate_field(&absent, DurationField::FirstResponse, 300.0),
            None
        );
        assert_eq!(
            aggregate_field(&all_outliers, DurationField::FirstResponse, 300.0),
            None
        );
        assert_eq!(aggregate(&[], 300.0), MetricAggregates::default());
    }

    #[test]
    fn test_fields_are_filtered_independently() {
        // The huge first-response value must not disturb the
        // recommendation aggregate on the same record.
        let metrics = vec![metric(Some(9999.0), Some(12.0)), metric(Some(3.0), Some(18.0))];

        let aggregates = aggregate(&metrics, 300.0);

        assert_eq!(aggregates.first_response.map(|s| s.count), Some(1));
        assert_eq!(aggregates.recommendation.map(|s| s.count), Some(2));
        assert_eq!(aggregates.recommendation.map(|s| s.average), Some(15.0));
    }

    #[test]
    fn test_average_stays_within_min_and_max() {
        let metrics = vec![
            metric(Some(1.5), None),
            metric(Some(8.0), None),
            metric(Some(22.25), None),
            metric(Some(180.0), None),
        ];

        for field in DurationField::ALL {
            if let Some(stats) = aggregate_field(&metrics, field, 300.0) {
                assert!(stats.min <= stats.average);
                assert!(stats.average <= stats.max);
                assert!(stats.count > 0);
            }
        }
    }

    #[test]
    fn test_tightening_the_threshold_never_grows_the_count() {
        let metrics = vec![
            metric(Some(5.0), None),
            metric(Some(50.0), None),
            metric(Some(500.0), None),
        ];

        let loose = aggregate_field(&metrics, DurationField::FirstResponse, 1000.0);
        let tight = aggregate_field(&metrics, DurationField::FirstResponse, 60.0);

        assert_eq!(loose.map(|s| s.count), Some(3));
        assert_eq!(tight.map(|s| s.count), Some(2));
    }

    #[test]
    fn test_summary_formats_persona_ratio() {
        let payload = UploadPayload {
            conversation_count: 5,
            metrics: vec![metric(Some(2.0), None)],
            persona_summary: Some(PersonaSummary {
                matched_conversations: 3,
                ..PersonaSummary::default()
            }),
            ..UploadPayload::default()
        };

        let report = SummaryReport::compute(&payload, 300.0);

        assert_eq!(report.persona_ratio.as_deref(), Some("3/5"));
        assert_eq!(report.conversation_count, 5);
    }

    #[test]
    fn test_summary_without_persona_data_has_no_ratio() {
        let payload = UploadPayload {
            conversation_count: 2,
            metrics: vec![metric(Some(2.0), Some(40.0))],
            ..UploadPayload::default()
        };

        let report = SummaryReport::compute(&payload, 300.0);

        assert_eq!(report.persona_ratio, None);
        assert_eq!(
            report.aggregates.get(DurationField::Recommendation).map(|s| s.count),
            Some(1)
        );
    }
}
