//! Dashboard composition: owned view state, collaborator seams, and
//! the dispatcher that fans analysis results out to them.

pub mod collaborators;
pub mod dispatch;
pub mod state;

pub use collaborators::{
    ChartRenderer, ConversationListView, DashboardShell, DebugInsightsView, LoadingGuard,
    RenderError, RenderResult, ReportExporter, Tab,
};
pub use dispatch::Dispatcher;
pub use state::ViewState;
