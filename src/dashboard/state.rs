//! Owned view state for the dashboard.
//!
//! One `ViewState` instance is owned by the application and passed by
//! reference to whoever needs it. Writes go through the methods here;
//! there is no ambient global to mutate from elsewhere.

use crate::analysis::types::{ConversationMetric, UploadPayload};

/// The dashboard's mutable state: the most recent analytics payload and
/// the currently selected conversation.
#[derive(Debug, Default)]
pub struct ViewState {
    last_payload: Option<UploadPayload>,
    selected_conversation: Option<u64>,
}

impl ViewState {
    /// Fresh state with no payload and no selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored payload wholesale.
    ///
    /// Any existing selection is cleared: it pointed into the data that
    /// was just replaced.
    pub fn record_upload(&mut self, payload: UploadPayload) {
        tracing::debug!(
            "Recording payload with {} conversations",
            payload.conversation_count
        );
        self.last_payload = Some(payload);
        self.selected_conversation = None;
    }

    /// The most recently recorded payload, if an upload has succeeded.
    #[must_use]
    pub const fn last_payload(&self) -> Option<&UploadPayload> {
        self.last_payload.as_ref()
    }

    /// Select a conversation by id.
    ///
    /// A selection that does not exist in the current payload is ignored
    /// with a warning, leaving the previous selection in place.
    pub fn select_conversation(&mut self, id: u64) {
        let known = self
            .last_payload
            .as_ref()
            .is_some_and(|payload| payload.metric(id).is_some());
        if known {
            self.selected_conversation = Some(id);
        } else {
            tracing::warn!("Ignoring selection of unknown conversation {id}");
        }
    }

    /// Clear the conversation selection.
    pub fn clear_selection(&mut self) {
        self.selected_conversation = None;
    }

    /// Id of the currently selected conversation.
    #[must_use]
    pub const fn selected_conversation(&self) -> Option<u64> {
        self.selected_conversation
    }

    /// Metric record of the currently selected conversation.
    #[must_use]
    pub fn selected_metric(&self) -> Option<&ConversationMetric> {
        let id = self.selected_conversation?;
        self.last_payload.as_ref()?.metric(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_with_ids(ids: &[u64]) -> UploadPayload {
        UploadPayload {
            conversation_count: ids.len() as u64,
            metrics: ids
                .iter()
                .map(|&conversation_id| ConversationMetric {
                    conversation_id,
                    ..ConversationMetric::default()
                })
                .collect(),
            ..UploadPayload::default()
        }
    }

    #[test]
    fn test_starts_empty() {
        let state = ViewState::new();
        assert!(state.last_payload().is_none());
        assert!(state.selected_conversation().is_none());
    }

    #[test]
    fn test_record_upload_replaces_wholesale() {
        let mut state = ViewState::new();
        state.record_upload(payload_with_ids(&[0, 1, 2]));
        state.record_upload(payload_with_ids(&[0]));

        assert_eq!(
            state.last_payload().map(|p| p.conversation_count),
            Some(1)
        );
    }

    #[test]
    fn test_record_upload_clears_selection() {
        let mut state = ViewState::new();
        state.record_upload(payload_with_ids(&[0, 1]));
        state.select_conversation(1);
        assert_eq!(state.selected_conversation(), Some(1));

        state.record_upload(payload_with_ids(&[0]));
        assert_eq!(state.selected_conversation(), None);
    }

    #[test]
    fn test_unknown_selection_is_ignored() {
        let mut state = ViewState::new();
        state.record_upload(payload_with_ids(&[0, 1]));
        state.select_conversation(0);

        state.select_conversation(42);

        assert_eq!(state.selected_conversation(), Some(0));
    }

    #[test]
    fn test_selection_without_payload_is_ignored() {
        let mut state = ViewState::new();
        state.select_conversation(0);
        assert_eq!(state.selected_conversation(), None);
    }

    #[test]
    fn test_selected_metric_resolves_the_record() {
        let mut state = ViewState::new();
        state.record_upload(payload_with_ids(&[0, 7]));
        state.select_conversation(7);

        assert_eq!(
            state.selected_metric().map(|m| m.conversation_id),
            Some(7)
        );

        state.clear_selection();
        assert!(state.selected_metric().is_none());
    }
}
