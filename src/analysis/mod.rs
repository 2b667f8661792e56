//! Analyzer-service client.
//!
//! This module owns the crate's side of the conversation with the
//! chat-analysis service:
//!
//! - [`config`] - endpoint, outlier threshold, and timeout settings
//! - [`error`] - the closed taxonomy of upload failures
//! - [`types`] - the wire model of the analytics payload
//! - [`response`] - status/body classification, transport-free
//! - [`stats`] - aggregate statistics over the returned metrics
//!
//! [`AnalyzerClient`] ties them together: it posts a chat export as
//! multipart form data, classifies the response, validates that the
//! payload is displayable, and records it in the view state.

pub mod config;
pub mod error;
pub mod response;
pub mod stats;
pub mod types;

pub use config::DashboardConfig;
pub use error::{UploadError, UploadResult};
pub use stats::{AggregateStats, DurationField, MetricAggregates, SummaryReport};
pub use types::{ChatExport, ConversationMetric, Recommendation, UploadPayload};

use crate::dashboard::collaborators::{DashboardShell, LoadingGuard};
use crate::dashboard::state::ViewState;

use response::{classify_response, ensure_displayable};

/// Client for the analyzer service's upload endpoint.
pub struct AnalyzerClient {
    config: DashboardConfig,
    http: reqwest::Client,
}

impl AnalyzerClient {
    /// Build a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Unexpected`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn new(config: DashboardConfig) -> UploadResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| UploadError::Unexpected(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Submit a chat export for analysis.
    ///
    /// The flow: reject a missing file before anything is shown, raise
    /// the loading indicator, POST the file as multipart form data,
    /// classify the response, reject payloads with no conversation
    /// data, then record the payload in `state`.
    ///
    /// The exclusive borrow of `state` for the whole call is what keeps
    /// a second submission from starting while this one is in flight.
    /// The loading indicator is scoped to the attempt and is released
    /// on every exit path, failures included.
    ///
    /// # Errors
    ///
    /// One [`UploadError`] per failure mode: no file, a rejected route,
    /// a server-side failure, an empty payload, or anything unexpected
    /// in between.
    pub async fn submit(
        &self,
        upload: Option<ChatExport>,
        state: &mut ViewState,
        shell: &dyn DashboardShell,
    ) -> UploadResult<UploadPayload> {
        let Some(export) = upload else {
            tracing::warn!("Submission attempted without a file");
            return Err(UploadError::NoFileSelected);
        };

        let _loading = LoadingGuard::begin(shell);

        let url = self.config.upload_url();
        tracing::info!(
            "Uploading {} ({} bytes) to {url}",
            export.file_name,
            export.bytes.len()
        );

        let part = reqwest::multipart::Part::bytes(export.bytes).file_name(export.file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self.http.post(url).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("Upload response: {status}, {} body bytes", body.len());

        let payload = ensure_displayable(classify_response(status, &body)?)?;

        tracing::info!(
            "Analysis complete: {} conversations, {} recommendations",
            payload.conversation_count,
            payload.recommendations.len()
        );
        state.record_upload(payload.clone());
        Ok(payload)
    }
}
