//! Classification of upload responses, independent of the transport.
//!
//! Given a status code and a body that have already been read off the
//! wire, these functions decide what the exchange meant. Keeping them
//! free of any HTTP client makes the status/body matrix testable
//! without a live server.

use reqwest::StatusCode;

use super::error::{UploadError, UploadResult};
use super::types::UploadPayload;

/// Map an upload response onto a payload or a classified failure.
///
/// HTTP 405 is singled out because it means the route itself rejected
/// the POST. Any other non-success status is treated as a server-side
/// failure carrying the service's own message when one can be found.
///
/// # Errors
///
/// * [`UploadError::MethodNotAllowed`] for HTTP 405.
/// * [`UploadError::ServerError`] for any other non-success status.
/// * [`UploadError::Unexpected`] when a success body fails to parse.
pub fn classify_response(status: StatusCode, body: &str) -> UploadResult<UploadPayload> {
    if status == StatusCode::METHOD_NOT_ALLOWED {
        return Err(UploadError::MethodNotAllowed);
    }
    if !status.is_success() {
        return Err(UploadError::ServerError(server_error_message(status, body)));
    }
    serde_json::from_str(body)
        .map_err(|e| UploadError::Unexpected(format!("malformed analytics payload: {e}")))
}

/// Prefer the `error` field of a JSON error body; otherwise fall back
/// to the status line's reason phrase.
fn server_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("error").and_then(serde_json::Value::as_str) {
            return message.to_string();
        }
    }
    status
        .canonical_reason()
        .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_string)
}

/// Reject payloads with nothing to display.
///
/// # Errors
///
/// Returns [`UploadError::EmptyConversationData`] when the payload has
/// no metric records.
pub fn ensure_displayable(payload: UploadPayload) -> UploadResult<UploadPayload> {
    if !payload.has_conversations() {
        return Err(UploadError::EmptyConversationData);
    }
    Ok(payload)
}
