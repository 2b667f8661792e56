//! Error taxonomy for the upload flow.
//!
//! The set of variants is closed on purpose: every way the flow can
//! fail maps onto exactly one of these, and the application surfaces
//! whichever one occurred as a single notification to the user.

use thiserror::Error;

/// Result alias for the upload flow.
pub type UploadResult<T> = Result<T, UploadError>;

/// Everything that can go wrong between picking a file and rendering
/// its analysis.
#[derive(Debug, Error)]
pub enum UploadError {
    /// No chat export was provided; no request was sent.
    #[error("no file selected")]
    NoFileSelected,

    /// The endpoint rejected the POST outright (HTTP 405). This points
    /// at a routing or deployment problem, not at the uploaded data.
    #[error("the upload endpoint does not accept POST requests; check the API deployment")]
    MethodNotAllowed,

    /// The service reported a failure of its own, with its message.
    #[error("{0}")]
    ServerError(String),

    /// The exchange succeeded but the payload carried no conversations,
    /// so there is nothing to render.
    #[error("the analyzed export contained no conversation data")]
    EmptyConversationData,

    /// Anything else: transport failures, interrupted reads, malformed
    /// success bodies.
    #[error("unexpected upload failure: {0}")]
    Unexpected(String),
}

impl UploadError {
    /// True when the failure points at how the service is deployed
    /// rather than at the uploaded file.
    #[must_use]
    pub const fn is_deployment_problem(&self) -> bool {
        matches!(self, Self::MethodNotAllowed)
    }
}

impl From<reqwest::Error> for UploadError {
    fn from(value: reqwest::Error) -> Self {
        Self::Unexpected(value.to_string())
    }
}
