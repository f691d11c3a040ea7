//! Domain types shared across the workspace.
//!
//! `KnowledgeRecord` is what the search index returns; `ResponsePayload`
//! is what the engine hands to the transport. Both are plain data with
//! serde derives so transport adapters can encode them for any channel.

use serde::{Deserialize, Serialize};

/// One indexed question/answer entry from the knowledge base.
///
/// Records are created and updated entirely outside this engine by index
/// ingestion; the engine only ever reads them back from query results.
/// Wire field names are PascalCase to match the index schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KnowledgeRecord {
    /// Unique record identifier.
    pub id: String,
    /// Groups related records in the index.
    #[serde(default)]
    pub group_id: String,
    /// The matchable prompt. Never empty in a well-formed index.
    pub question: String,
    /// Short-form answer. May be empty (degenerate detail card).
    #[serde(default)]
    pub quick_steps: String,
    /// Long-form answer. May be empty (degenerate detail card).
    #[serde(default)]
    pub detailed_steps: String,
}

/// The engine's output: a closed set of response shapes.
///
/// Modeled as a tagged variant so every transport adapter can handle all
/// cases exhaustively at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponsePayload {
    /// Multiple candidate questions for the user to pick from, in index
    /// ranking order, with a fixed opt-out option appended by the transport.
    SuggestionList {
        options: Vec<String>,
        none_of_above_label: String,
    },
    /// A single matched record rendered as a detail card.
    AnswerDetail {
        question: String,
        quick_steps: String,
        detailed_steps: String,
    },
    /// A plain text message.
    PlainText { text: String },
    /// A greeting for a newly added conversation member.
    Welcome { text: String },
}
