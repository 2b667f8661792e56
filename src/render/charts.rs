//! ASCII chart rendering: timing bars, persona analysis, the
//! recommendations table.

use crate::analysis::stats::DurationField;
use crate::analysis::types::{Recommendation, UploadPayload};
use crate::dashboard::collaborators::{ChartRenderer, RenderResult};

use super::{heading, truncate_text};

/// Width in characters of the longest bar.
const BAR_WIDTH: usize = 40;

/// Longest histogram bar in the persona analysis panel.
const HISTOGRAM_WIDTH: u64 = 40;

/// Chart renderer that draws proportional ASCII bars on stdout.
pub struct TextCharts {
    color: bool,
}

impl TextCharts {
    /// Charts with colored headings when `color` is on.
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    fn bars(&self, payload: &UploadPayload, field: DurationField) {
        heading(self.color, field.label());
        let rows: Vec<(u64, f64)> = payload
            .metrics
            .iter()
            .filter_map(|m| field.value_of(m).map(|value| (m.conversation_id, value)))
            .collect();
        if rows.is_empty() {
            println!("  (no timing data)");
            return;
        }
        let scale = rows.iter().map(|(_, value)| *value).fold(0.0_f64, f64::max);
        for (id, value) in &rows {
            let bar = "#".repeat(scaled_width(*value, scale, BAR_WIDTH));
            println!("  #{id:<4} {bar:<pad$} {value:>8.1}s", pad = BAR_WIDTH);
        }
    }
}

/// Bar length for a value against the chart's largest value. Always at
/// least one character so every plotted row is visible.
fn scaled_width(value: f64, scale: f64, max_width: usize) -> usize {
    if scale <= 0.0 {
        return 1;
    }
    let width = ((value / scale) * max_width as f64).round() as usize;
    width.clamp(1, max_width)
}

impl ChartRenderer for TextCharts {
    fn display_charts(&self, payload: &UploadPayload) -> RenderResult {
        for field in DurationField::ALL {
            self.bars(payload, field);
        }
        Ok(())
    }

    fn update_recommendation_analysis(&self, payload: &UploadPayload) -> RenderResult {
        let Some(summary) = &payload.persona_summary else {
            return Err("persona summary missing from payload".into());
        };

        heading(self.color, "Persona analysis");
        println!("  Personas known: {}", summary.persona_count);
        println!("  Matched conversations: {}", summary.matched_conversations);
        println!(
            "  Avg accuracy {:.0}%, precision {:.0}%, recall {:.0}%",
            summary.avg_accuracy * 100.0,
            summary.avg_precision * 100.0,
            summary.avg_recall * 100.0
        );

        if !summary.accuracy_distribution.is_empty() {
            println!("  Accuracy distribution:");
            for (bucket, count) in &summary.accuracy_distribution {
                let bar = "#".repeat((*count).min(HISTOGRAM_WIDTH) as usize);
                println!("    {bucket:>10} {bar} ({count})");
            }
        }
        Ok(())
    }

    fn update_recommendations_table(&self, recommendations: &[Recommendation]) -> RenderResult {
        heading(self.color, "Recommendations");
        println!(
            "  {:<4} {:<38} {:<30} {:>8}",
            "ID", "REQUEST", "ITEMS", "ACCURACY"
        );
        for rec in recommendations {
            let request = truncate_text(rec.request.as_deref().unwrap_or("(no request)"), 38);
            let items = truncate_text(&rec.items.join(", "), 30);
            let accuracy = rec
                .accuracy
                .map_or_else(|| "n/a".to_string(), |a| format!("{:.0}%", a * 100.0));
            println!(
                "  {:<4} {request:<38} {items:<30} {accuracy:>8}",
                rec.conversation_id
            );
        }
        Ok(())
    }
}
