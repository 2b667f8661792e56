//! Terminal shell: loading status, summary numbers, error output.

use owo_colors::OwoColorize;

use crate::analysis::stats::{DurationField, SummaryReport};
use crate::dashboard::collaborators::{DashboardShell, Tab};

use super::{format_stats, heading};

/// Shell implementation that writes to stdout and stderr.
pub struct TerminalShell {
    color: bool,
}

impl TerminalShell {
    /// Shell with colored headings when `color` is on.
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }
}

impl DashboardShell for TerminalShell {
    fn loading_started(&self) {
        println!("Analyzing chat export, this can take a moment...");
    }

    fn loading_finished(&self) {
        // A terminal has nothing to un-show; the analog of hiding the
        // indicator is simply not printing it again.
        tracing::debug!("Loading indicator released");
    }

    fn reveal_results(&self) {
        heading(self.color, "=== Analysis results ===");
    }

    fn render_summary(&self, report: &SummaryReport) {
        heading(self.color, "Summary");
        println!("  Conversations analyzed: {}", report.conversation_count);
        for field in DurationField::ALL {
            println!(
                "  {}: {}",
                field.label(),
                format_stats(report.aggregates.get(field))
            );
        }
        if let Some(ratio) = &report.persona_ratio {
            println!("  Persona matches: {ratio}");
        }
    }

    fn activate_tab(&self, tab: Tab) {
        println!("\n(viewing: {})", tab.id());
    }

    fn notify_error(&self, message: &str) {
        if self.color {
            eprintln!("{} {message}", "error:".red().bold());
        } else {
            eprintln!("error: {message}");
        }
    }
}
