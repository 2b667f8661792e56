//! CLI surface and application bootstrap.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use is_terminal::IsTerminal as _;
use url::Url;

use crate::analysis::AnalyzerClient;
use crate::analysis::config::DashboardConfig;
use crate::analysis::types::ChatExport;
use crate::dashboard::collaborators::{DashboardShell as _, ReportExporter as _};
use crate::dashboard::{Dispatcher, ViewState};
use crate::render::{ConversationTable, InsightsPanel, MarkdownExporter, TerminalShell, TextCharts};

/// Upload a chat export to the analyzer service and render the results.
#[derive(Debug, Parser)]
#[command(
    name = "convodash",
    version,
    about = "Terminal dashboard for the chat-analysis service"
)]
pub struct Cli {
    /// Chat export file to upload for analysis.
    pub file: Option<PathBuf>,

    /// Base URL of the analyzer service. Falls back to CONVODASH_API_URL,
    /// then to the service's local development address.
    #[arg(long, value_name = "URL")]
    pub api_url: Option<Url>,

    /// Exclude timing values above this many seconds from the summary
    /// statistics. Falls back to CONVODASH_MAX_REASONABLE_TIME.
    #[arg(long, value_name = "SECONDS")]
    pub max_reasonable_time: Option<f64>,

    /// Write a Markdown report to this path after rendering.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Select one conversation by id; its details are included in the
    /// exported report.
    #[arg(long, value_name = "ID")]
    pub conversation: Option<u64>,
}

/// Parse the command line, run one upload/render cycle, and map the
/// outcome onto a process exit code.
#[must_use]
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create async runtime: {e}");
            return ExitCode::from(1);
        }
    };

    match rt.block_on(execute(cli)) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// One upload/render cycle.
///
/// Setup problems (bad configuration, unreadable file, failed report
/// write) propagate as errors. Upload-flow failures are surfaced to the
/// user through the shell exactly once and reported via the exit code.
async fn execute(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = match cli.api_url {
        Some(url) => DashboardConfig::new(url),
        None => DashboardConfig::from_env().context("invalid analyzer endpoint")?,
    };
    if let Some(threshold) = cli.max_reasonable_time {
        config = config.with_max_reasonable_time(threshold);
    }
    let max_reasonable = config.max_reasonable_time;

    let interactive = std::io::stdout().is_terminal();
    let shell = TerminalShell::new(interactive);

    let upload = match &cli.file {
        Some(path) => Some(
            ChatExport::from_path(path)
                .with_context(|| format!("failed to read chat export {}", path.display()))?,
        ),
        None => None,
    };

    let client = AnalyzerClient::new(config)?;
    let mut state = ViewState::new();

    let payload = match client.submit(upload, &mut state, &shell).await {
        Ok(payload) => payload,
        Err(e) => {
            shell.notify_error(&e.to_string());
            return Ok(ExitCode::from(1));
        }
    };

    let mut dispatcher = Dispatcher::new()
        .with_conversation_list(Box::new(ConversationTable::new(interactive)))
        .with_insights(Box::new(InsightsPanel::new(interactive)));
    if interactive {
        dispatcher = dispatcher.with_charts(Box::new(TextCharts::new(interactive)));
    }
    dispatcher.dispatch(&payload, &shell, max_reasonable);

    if let Some(id) = cli.conversation {
        state.select_conversation(id);
    }

    if let Some(path) = cli.export {
        let exporter = MarkdownExporter::new(path, max_reasonable);
        let written = exporter
            .export(&state)
            .map_err(|e| anyhow::anyhow!("report export failed: {e}"))?;
        tracing::info!("Report written to {}", written.display());
    }

    Ok(ExitCode::SUCCESS)
}
