//! Conversation list rendering.

use crate::analysis::types::{ConversationMetric, Recommendation};
use crate::dashboard::collaborators::{ConversationListView, RenderResult};

use super::{heading, truncate_text};

/// Conversation list rendered as a fixed-width table.
pub struct ConversationTable {
    color: bool,
}

impl ConversationTable {
    /// Table with a colored heading when `color` is on.
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }
}

/// Total number of recommended items across a conversation's replies.
fn item_count(recommendations: &[Recommendation], conversation_id: u64) -> usize {
    recommendations
        .iter()
        .filter(|rec| rec.conversation_id == conversation_id)
        .map(|rec| rec.items.len())
        .sum()
}

fn format_seconds(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.1}s"))
}

impl ConversationListView for ConversationTable {
    fn initialize(
        &self,
        metrics: &[ConversationMetric],
        recommendations: &[Recommendation],
    ) -> RenderResult {
        heading(self.color, "Conversations");
        if metrics.is_empty() {
            println!("  (no conversations)");
            return Ok(());
        }

        println!(
            "  {:<4} {:<40} {:>9} {:>10} {:>6} {:>5}",
            "ID", "REQUEST", "FIRST", "RECOMMEND", "ITEMS", "ACC"
        );
        for metric in metrics {
            let request = truncate_text(metric.request.as_deref().unwrap_or("(no request)"), 40);
            let first = format_seconds(metric.time_to_first_response);
            let recommend = format_seconds(metric.time_to_recommendation);
            let items = item_count(recommendations, metric.conversation_id);
            let accuracy = metric
                .recommendation_accuracy
                .map_or_else(|| "n/a".to_string(), |a| format!("{:.0}%", a * 100.0));
            println!(
                "  {:<4} {request:<40} {first:>9} {recommend:>10} {items:>6} {accuracy:>5}",
                metric.conversation_id
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_count_sums_across_replies() {
        let recommendations = vec![
            Recommendation {
                conversation_id: 0,
                items: vec!["a".to_string(), "b".to_string()],
                ..Recommendation::default()
            },
            Recommendation {
                conversation_id: 0,
                items: vec!["c".to_string()],
                ..Recommendation::default()
            },
            Recommendation {
                conversation_id: 1,
                items: vec!["d".to_string()],
                ..Recommendation::default()
            },
        ];

        assert_eq!(item_count(&recommendations, 0), 3);
        assert_eq!(item_count(&recommendations, 1), 1);
        assert_eq!(item_count(&recommendations, 2), 0);
    }

    #[test]
    fn test_seconds_column_distinguishes_missing_from_zero() {
        assert_eq!(format_seconds(None), "n/a");
        assert_eq!(format_seconds(Some(0.0)), "0.0s");
        assert_eq!(format_seconds(Some(41.54)), "41.5s");
    }
}
