//! Collaborator seams driven by the dispatcher.
//!
//! Rendering is split across narrow traits so each surface can be
//! swapped or left unregistered independently. The dispatcher treats a
//! missing collaborator as a logged absence, never a failure.

use std::error::Error;
use std::path::PathBuf;

use crate::analysis::stats::SummaryReport;
use crate::analysis::types::{ConversationMetric, Recommendation, UploadPayload};

use super::state::ViewState;

/// Boxed error raised by a rendering collaborator.
pub type RenderError = Box<dyn Error + Send + Sync>;

/// Result of a collaborator call.
pub type RenderResult = Result<(), RenderError>;

/// Tabs of the results view.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Tab {
    /// Aggregate statistics. The default tab after every upload.
    #[default]
    Summary,
    /// Chart panels.
    Charts,
    /// Conversation list.
    Conversations,
    /// Debug insights.
    Insights,
}

impl Tab {
    /// Stable identifier, usable as a bookmark fragment.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Charts => "charts",
            Self::Conversations => "conversations",
            Self::Insights => "insights",
        }
    }
}

/// The surrounding UI surface: loading indicator, results container,
/// summary numbers, tab strip, error notifications.
///
/// The shell is the one collaborator that is never optional; the
/// application cannot say anything to the user without it.
pub trait DashboardShell {
    /// Show the loading indicator.
    fn loading_started(&self);

    /// Hide the loading indicator.
    ///
    /// Called on every exit path, including failures, so it must be
    /// safe to invoke when nothing else was rendered.
    fn loading_finished(&self);

    /// Make the results container visible.
    fn reveal_results(&self);

    /// Render the computed summary numbers.
    fn render_summary(&self, report: &SummaryReport);

    /// Bring `tab` to the front.
    fn activate_tab(&self, tab: Tab);

    /// Surface a blocking error notification to the user.
    fn notify_error(&self, message: &str);
}

/// Chart-rendering collaborator.
pub trait ChartRenderer {
    /// Render the standard chart set for a payload.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when the chart backend fails.
    fn display_charts(&self, payload: &UploadPayload) -> RenderResult;

    /// Render the persona/recommendation analysis panel.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when the panel cannot be rendered.
    fn update_recommendation_analysis(&self, payload: &UploadPayload) -> RenderResult;

    /// Render the recommendations table.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when the table cannot be rendered.
    fn update_recommendations_table(&self, recommendations: &[Recommendation]) -> RenderResult;
}

/// Conversation-list collaborator.
pub trait ConversationListView {
    /// Populate the list from metrics and recommendations. Both slices
    /// may be empty but are never missing.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when the list cannot be rendered.
    fn initialize(
        &self,
        metrics: &[ConversationMetric],
        recommendations: &[Recommendation],
    ) -> RenderResult;
}

/// Debug-insights collaborator.
pub trait DebugInsightsView {
    /// Populate the insights panel from the full payload.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when the panel cannot be rendered.
    fn initialize(&self, payload: &UploadPayload) -> RenderResult;
}

/// Report exporter. Driven by an explicit user action, not by the
/// upload flow.
pub trait ReportExporter {
    /// Write a report of the current view state, returning the path it
    /// was written to.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when there is nothing to export or the
    /// report cannot be written.
    fn export(&self, state: &ViewState) -> Result<PathBuf, RenderError>;
}

/// Scoped loading indicator.
///
/// Shows the indicator on creation and hides it on drop, so every exit
/// path out of the upload flow, early returns included, releases it.
pub struct LoadingGuard<'a> {
    shell: &'a dyn DashboardShell,
}

impl<'a> LoadingGuard<'a> {
    /// Show the indicator until the returned guard is dropped.
    #[must_use]
    pub fn begin(shell: &'a dyn DashboardShell) -> Self {
        shell.loading_started();
        Self { shell }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.shell.loading_finished();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingShell {
        started: AtomicUsize,
        finished: AtomicUsize,
    }

    impl DashboardShell for CountingShell {
        fn loading_started(&self) {
            self.started.fetch_add(1, Ordering::SeqCst);
        }
        fn loading_finished(&self) {
            self.finished.fetch_add(1, Ordering::SeqCst);
        }
        fn reveal_results(&self) {}
        fn render_summary(&self, _report: &SummaryReport) {}
        fn activate_tab(&self, _tab: Tab) {}
        fn notify_error(&self, _message: &str) {}
    }

    #[test]
    fn test_guard_shows_then_hides() {
        let shell = CountingShell::default();
        {
            let _guard = LoadingGuard::begin(&shell);
            assert_eq!(shell.started.load(Ordering::SeqCst), 1);
            assert_eq!(shell.finished.load(Ordering::SeqCst), 0);
        }
        assert_eq!(shell.finished.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_guard_hides_on_early_exit() {
        let shell = CountingShell::default();
        let attempt = || -> Result<(), &'static str> {
            let _guard = LoadingGuard::begin(&shell);
            Err("bailed before rendering")
        };

        assert!(attempt().is_err());
        assert_eq!(shell.started.load(Ordering::SeqCst), 1);
        assert_eq!(shell.finished.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_default_tab_is_summary() {
        assert_eq!(Tab::default(), Tab::Summary);
        assert_eq!(Tab::default().id(), "summary");
    }

    #[test]
    fn test_tab_ids_are_distinct() {
        let ids = [
            Tab::Summary.id(),
            Tab::Charts.id(),
            Tab::Conversations.id(),
            Tab::Insights.id(),
        ];
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
