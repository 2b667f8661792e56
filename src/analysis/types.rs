//! Wire model for the analyzer service's upload endpoint.
//!
//! Every field the service may omit is either an `Option` or carries a
//! serde default, so a sparse payload deserializes instead of erroring.
//! Whether a payload is *usable* is a separate question answered by
//! [`UploadPayload::has_conversations`].

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Top-level analytics payload returned by a successful upload.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UploadPayload {
    /// Number of conversations found in the export.
    #[serde(default)]
    pub conversation_count: u64,
    /// Per-conversation timing and debug metrics.
    #[serde(default)]
    pub metrics: Vec<ConversationMetric>,
    /// Recommendations extracted from assistant replies.
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    /// Persona-matching rollup, present when the service had persona
    /// data to match against.
    #[serde(default)]
    pub persona_summary: Option<PersonaSummary>,
    /// Compact per-conversation summaries, used for report export.
    #[serde(default)]
    pub conversation_summaries: Vec<ConversationSummary>,
    /// Category/concept graph assembled from debug metadata.
    #[serde(default)]
    pub network: Option<MetadataNetwork>,
}

impl UploadPayload {
    /// Whether the payload carries any conversation data worth rendering.
    #[must_use]
    pub fn has_conversations(&self) -> bool {
        !self.metrics.is_empty()
    }

    /// Metric record for a conversation id, if the id exists.
    #[must_use]
    pub fn metric(&self, conversation_id: u64) -> Option<&ConversationMetric> {
        self.metrics
            .iter()
            .find(|metric| metric.conversation_id == conversation_id)
    }
}

/// Timing and debug metrics for a single conversation.
///
/// All timing fields are in seconds. A `None` means the corresponding
/// event never happened in that conversation (for example the assistant
/// never produced a recommendation), not that it took zero seconds.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConversationMetric {
    /// Zero-based conversation index within the export.
    #[serde(default)]
    pub conversation_id: u64,
    /// The user request that opened the conversation.
    #[serde(default)]
    pub request: Option<String>,
    /// Seconds from the request to the first non-user message.
    #[serde(default)]
    pub time_to_first_response: Option<f64>,
    /// Seconds from the request to the processing acknowledgement.
    #[serde(default)]
    pub time_to_processing: Option<f64>,
    /// Seconds from the request to the recommendation reply.
    #[serde(default)]
    pub time_to_recommendation: Option<f64>,
    /// Seconds from the request to the last message of the conversation.
    #[serde(default)]
    pub total_conversation_time: Option<f64>,
    /// Number of debug messages observed in the conversation.
    #[serde(default)]
    pub debug_count: u64,
    /// Number of metadata entries in the first debug message.
    #[serde(default)]
    pub metadata_count: u64,
    /// Result keys reported by the understood-context debug message.
    #[serde(default)]
    pub context_keys: Vec<String>,
    /// Identifier of the persona matched to this conversation.
    #[serde(default)]
    pub persona_id: Option<String>,
    /// Description of the matched persona.
    #[serde(default)]
    pub persona_description: Option<String>,
    /// Recommendation accuracy against the persona's expectations, 0 to 1.
    #[serde(default)]
    pub recommendation_accuracy: Option<f64>,
}

/// A recommendation extracted from one assistant reply.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Recommendation {
    /// Conversation the reply belongs to.
    #[serde(default)]
    pub conversation_id: u64,
    /// The user request that led to this recommendation.
    #[serde(default)]
    pub request: Option<String>,
    /// Item names extracted from the reply.
    #[serde(default)]
    pub items: Vec<String>,
    /// Item names the matched persona expected to see.
    #[serde(default)]
    pub expected_items: Vec<String>,
    /// Full text of the recommendation reply.
    #[serde(default)]
    pub full_recommendation: String,
    /// Accuracy against the persona's expectations, 0 to 1, when evaluated.
    #[serde(default)]
    pub accuracy: Option<f64>,
    /// Identifier of the persona used for the evaluation.
    #[serde(default)]
    pub persona_id: Option<String>,
    /// Description of that persona.
    #[serde(default)]
    pub persona_description: Option<String>,
}

/// Persona-analysis rollup across the whole export.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersonaSummary {
    /// Personas known to the analyzer.
    #[serde(default)]
    pub persona_count: u64,
    /// Conversations that were matched to a persona.
    #[serde(default)]
    pub matched_conversations: u64,
    /// Mean recommendation accuracy across matched conversations.
    #[serde(default)]
    pub avg_accuracy: f64,
    /// Mean precision across matched conversations.
    #[serde(default)]
    pub avg_precision: f64,
    /// Mean recall across matched conversations.
    #[serde(default)]
    pub avg_recall: f64,
    /// Accuracy histogram, bucket label to conversation count.
    #[serde(default)]
    pub accuracy_distribution: BTreeMap<String, u64>,
    /// Histogram of per-reply recommendation counts.
    #[serde(default)]
    pub recommendation_counts: BTreeMap<String, u64>,
}

/// Compact summary of one conversation, used when exporting reports.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// Zero-based conversation index within the export.
    #[serde(default)]
    pub id: u64,
    /// The opening user request.
    #[serde(default)]
    pub request: Option<String>,
    /// The recommendation reply, if one was produced.
    #[serde(default)]
    pub recommendation: Option<String>,
    /// Local time of the opening request.
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

/// Category/concept graph assembled from debug metadata.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MetadataNetwork {
    /// Graph nodes.
    #[serde(default)]
    pub nodes: Vec<NetworkNode>,
    /// Undirected edges between node ids.
    #[serde(default)]
    pub edges: Vec<NetworkEdge>,
}

/// One node of the metadata graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetworkNode {
    /// Node identifier, a category or concept name.
    pub id: String,
    /// Node kind as reported by the service.
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// One edge of the metadata graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetworkEdge {
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
}

/// A chat export staged for upload.
#[derive(Clone, Debug)]
pub struct ChatExport {
    /// File name forwarded to the service in the multipart part.
    pub file_name: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl ChatExport {
    /// Stage an in-memory export under the given file name.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read an export from disk, keeping the on-disk file name.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path.file_name().map_or_else(
            || "chat-export.txt".to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        Ok(Self { file_name, bytes })
    }
}
