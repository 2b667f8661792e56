//! Best-effort fan-out of a validated payload to the collaborators.

use crate::analysis::stats::SummaryReport;
use crate::analysis::types::UploadPayload;

use super::collaborators::{
    ChartRenderer, ConversationListView, DashboardShell, DebugInsightsView, Tab,
};

/// Fans a validated payload out to the registered collaborators in a
/// fixed order.
///
/// A failing or unregistered collaborator is logged and skipped: a
/// broken chart backend must not keep the conversation list or the
/// insights panel from rendering. Each optional slot is checked exactly
/// once per dispatch.
#[derive(Default)]
pub struct Dispatcher {
    charts: Option<Box<dyn ChartRenderer>>,
    conversations: Option<Box<dyn ConversationListView>>,
    insights: Option<Box<dyn DebugInsightsView>>,
}

impl Dispatcher {
    /// Dispatcher with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the chart renderer.
    #[must_use]
    pub fn with_charts(mut self, charts: Box<dyn ChartRenderer>) -> Self {
        self.charts = Some(charts);
        self
    }

    /// Register the conversation list view.
    #[must_use]
    pub fn with_conversation_list(mut self, view: Box<dyn ConversationListView>) -> Self {
        self.conversations = Some(view);
        self
    }

    /// Register the debug insights view.
    #[must_use]
    pub fn with_insights(mut self, view: Box<dyn DebugInsightsView>) -> Self {
        self.insights = Some(view);
        self
    }

    /// Reveal the results view and fan `payload` out.
    ///
    /// Order: results container, summary numbers, charts, conversation
    /// list, debug insights, then the default tab. The payload is read,
    /// never modified.
    pub fn dispatch(
        &self,
        payload: &UploadPayload,
        shell: &dyn DashboardShell,
        max_reasonable: f64,
    ) {
        shell.reveal_results();

        let report = SummaryReport::compute(payload, max_reasonable);
        shell.render_summary(&report);

        self.dispatch_charts(payload);
        self.dispatch_conversations(payload);
        self.dispatch_insights(payload);

        shell.activate_tab(Tab::default());
    }

    fn dispatch_charts(&self, payload: &UploadPayload) {
        let Some(charts) = &self.charts else {
            tracing::error!("No chart renderer registered; skipping charts");
            return;
        };

        if let Err(e) = charts.display_charts(payload) {
            tracing::error!("Chart rendering failed: {e}");
        }

        if payload.persona_summary.is_some() {
            if let Err(e) = charts.update_recommendation_analysis(payload) {
                tracing::error!("Recommendation analysis rendering failed: {e}");
            }
        }

        if payload.recommendations.is_empty() {
            tracing::warn!("Payload carried no recommendations; skipping the table");
        } else if let Err(e) = charts.update_recommendations_table(&payload.recommendations) {
            tracing::error!("Recommendations table rendering failed: {e}");
        }
    }

    fn dispatch_conversations(&self, payload: &UploadPayload) {
        let Some(view) = &self.conversations else {
            tracing::error!("No conversation list registered; skipping the list");
            return;
        };
        if let Err(e) = view.initialize(&payload.metrics, &payload.recommendations) {
            tracing::error!("Conversation list rendering failed: {e}");
        }
    }

    fn dispatch_insights(&self, payload: &UploadPayload) {
        let Some(view) = &self.insights else {
            tracing::error!("No debug insights view registered; skipping insights");
            return;
        };
        if let Err(e) = view.initialize(payload) {
            tracing::error!("Debug insights rendering failed: {e}");
        }
    }
}
