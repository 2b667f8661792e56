//! Markdown report export.
//!
//! Rendering is split from writing so the report body can be tested
//! without touching the filesystem.

use std::path::PathBuf;

use crate::analysis::stats::{DurationField, SummaryReport};
use crate::dashboard::collaborators::{RenderError, ReportExporter};
use crate::dashboard::state::ViewState;

use super::format_stats;

/// Exports the current analysis as a Markdown file.
pub struct MarkdownExporter {
    path: PathBuf,
    max_reasonable_time: f64,
}

impl MarkdownExporter {
    /// Exporter writing to `path`, using `max_reasonable_time` as the
    /// outlier threshold for the summary section.
    #[must_use]
    pub fn new(path: PathBuf, max_reasonable_time: f64) -> Self {
        Self {
            path,
            max_reasonable_time,
        }
    }

    /// Render the report body for the current state, or `None` when no
    /// analysis has been recorded yet.
    #[must_use]
    pub fn render_report(&self, state: &ViewState) -> Option<String> {
        let payload = state.last_payload()?;
        let report = SummaryReport::compute(payload, self.max_reasonable_time);

        let mut out = String::new();
        out.push_str("# Chat analysis report\n\n");
        out.push_str(&format!(
            "Generated: {}\n\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
        ));

        out.push_str("## Summary\n\n");
        out.push_str(&format!(
            "- Conversations analyzed: {}\n",
            report.conversation_count
        ));
        for field in DurationField::ALL {
            out.push_str(&format!(
                "- {}: {}\n",
                field.label(),
                format_stats(report.aggregates.get(field))
            ));
        }
        if let Some(ratio) = &report.persona_ratio {
            out.push_str(&format!("- Persona matches: {ratio}\n"));
        }

        if !payload.conversation_summaries.is_empty() {
            out.push_str("\n## Conversations\n");
            for summary in &payload.conversation_summaries {
                out.push('\n');
                match summary.timestamp {
                    Some(ts) => out.push_str(&format!(
                        "### Conversation {} ({})\n",
                        summary.id,
                        ts.format("%Y-%m-%d %H:%M")
                    )),
                    None => out.push_str(&format!("### Conversation {}\n", summary.id)),
                }
                out.push_str(&format!(
                    "- Request: {}\n",
                    summary.request.as_deref().unwrap_or("(no request)")
                ));
                if let Some(recommendation) = &summary.recommendation {
                    out.push_str(&format!("- Recommendation: {recommendation}\n"));
                }
            }
        }

        if let Some(metric) = state.selected_metric() {
            out.push_str("\n## Selected conversation\n\n");
            out.push_str(&format!("- Id: {}\n", metric.conversation_id));
            if let Some(request) = &metric.request {
                out.push_str(&format!("- Request: {request}\n"));
            }
            if let Some(value) = metric.time_to_first_response {
                out.push_str(&format!("- Time to first response: {value:.1}s\n"));
            }
            if let Some(value) = metric.time_to_recommendation {
                out.push_str(&format!("- Time to recommendation: {value:.1}s\n"));
            }
            if let Some(value) = metric.total_conversation_time {
                out.push_str(&format!("- Total conversation time: {value:.1}s\n"));
            }
            out.push_str(&format!("- Debug messages: {}\n", metric.debug_count));
            if let Some(persona) = &metric.persona_description {
                out.push_str(&format!("- Persona: {persona}\n"));
            }
        }

        Some(out)
    }
}

impl ReportExporter for MarkdownExporter {
    fn export(&self, state: &ViewState) -> Result<PathBuf, RenderError> {
        let Some(report) = self.render_report(state) else {
            return Err("nothing to export: no analysis has been recorded".into());
        };
        std::fs::write(&self.path, report)?;
        Ok(self.path.clone())
    }
}
