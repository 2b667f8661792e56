//! Debug insights rendering: message counts, frequent context keys,
//! and the size of the concept network.

use std::collections::HashMap;

use crate::analysis::types::{ConversationMetric, UploadPayload};
use crate::dashboard::collaborators::{DebugInsightsView, RenderResult};

use super::heading;

/// How many context keys the panel lists.
const TOP_KEYS: usize = 5;

/// Insights panel over the payload's debug metadata.
pub struct InsightsPanel {
    color: bool,
}

impl InsightsPanel {
    /// Panel with a colored heading when `color` is on.
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }
}

/// Most frequent context keys, most common first; ties break
/// alphabetically so the output is stable.
fn top_context_keys(metrics: &[ConversationMetric], limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for metric in metrics {
        for key in &metric.context_keys {
            *counts.entry(key.as_str()).or_insert(0) += 1;
        }
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(key, count)| (key.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

impl DebugInsightsView for InsightsPanel {
    fn initialize(&self, payload: &UploadPayload) -> RenderResult {
        heading(self.color, "Debug insights");

        let debug_total: u64 = payload.metrics.iter().map(|m| m.debug_count).sum();
        let metadata_total: u64 = payload.metrics.iter().map(|m| m.metadata_count).sum();
        let with_debug = payload
            .metrics
            .iter()
            .filter(|m| m.debug_count > 0)
            .count();

        println!("  Debug messages: {debug_total} across {with_debug} conversations");
        println!("  Metadata entries: {metadata_total}");

        let top = top_context_keys(&payload.metrics, TOP_KEYS);
        if !top.is_empty() {
            let rendered: Vec<String> = top
                .iter()
                .map(|(key, count)| format!("{key} ({count})"))
                .collect();
            println!("  Frequent context keys: {}", rendered.join(", "));
        }

        if let Some(network) = &payload.network {
            println!(
                "  Concept network: {} nodes, {} edges",
                network.nodes.len(),
                network.edges.len()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric_with_keys(keys: &[&str]) -> ConversationMetric {
        ConversationMetric {
            context_keys: keys.iter().map(|k| (*k).to_string()).collect(),
            ..ConversationMetric::default()
        }
    }

    #[test]
    fn test_keys_rank_by_frequency() {
        let metrics = vec![
            metric_with_keys(&["cuisine", "location"]),
            metric_with_keys(&["cuisine", "budget"]),
            metric_with_keys(&["cuisine", "location"]),
        ];

        let top = top_context_keys(&metrics, 5);

        assert_eq!(
            top,
            vec![
                ("cuisine".to_string(), 3),
                ("location".to_string(), 2),
                ("budget".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_ties_break_alphabetically() {
        let metrics = vec![metric_with_keys(&["zeta", "alpha"])];

        let top = top_context_keys(&metrics, 5);

        assert_eq!(
            top,
            vec![("alpha".to_string(), 1), ("zeta".to_string(), 1)]
        );
    }

    #[test]
    fn test_limit_caps_the_list() {
        let metrics = vec![metric_with_keys(&["a", "b", "c", "d", "e", "f", "g"])];

        assert_eq!(top_context_keys(&metrics, 3).len(), 3);
    }

    #[test]
    fn test_no_keys_means_an_empty_list() {
        assert!(top_context_keys(&[], 5).is_empty());
        assert!(top_context_keys(&[metric_with_keys(&[])], 5).is_empty());
    }
}
