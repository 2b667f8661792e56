//! Terminal implementations of the dashboard collaborator seams.
//!
//! Every renderer here writes plain text to stdout, with optional bold
//! headings when the output is a terminal. Anything that needs a
//! different surface (a GUI, an HTML page) implements the same traits
//! elsewhere; nothing in the rest of the crate knows these exist.

pub mod charts;
pub mod conversations;
pub mod export;
pub mod insights;
pub mod shell;

pub use charts::TextCharts;
pub use conversations::ConversationTable;
pub use export::MarkdownExporter;
pub use insights::InsightsPanel;
pub use shell::TerminalShell;

use owo_colors::OwoColorize;

use crate::analysis::stats::AggregateStats;

/// Print a section heading, bold when color is on.
pub(crate) fn heading(color: bool, text: &str) {
    if color {
        println!("\n{}", text.bold());
    } else {
        println!("\n{text}");
    }
}

/// One-line rendering of a stats slot. An empty slot reads "n/a" so it
/// can never be mistaken for a measured zero.
pub(crate) fn format_stats(stats: Option<AggregateStats>) -> String {
    stats.map_or_else(
        || "n/a".to_string(),
        |s| {
            format!(
                "avg {:.1}s, min {:.1}s, max {:.1}s (n={})",
                s.average, s.min, s.max, s.count
            )
        },
    )
}

/// Shorten text to at most `max_chars` characters, appending an
/// ellipsis when something was cut. Operates on characters, not bytes,
/// so multi-byte input cannot split mid-character.
pub(crate) fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
