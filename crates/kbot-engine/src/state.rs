//! Per-conversation dialog state.
//!
//! Process-scoped store keyed by conversation id. A turn reads state at most
//! once and writes it back at the end; per-key locking keeps those
//! read-modify-write pairs from interleaving across concurrent turns for
//! the same conversation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Where the refinement flow stands for one conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefinementPhase {
    #[default]
    Idle,
    /// The user opted out of the suggestions and was asked to rephrase.
    AwaitingRefinement,
}

/// Dialog state for one conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogState {
    /// Opaque dialog-stack token owned by an external collaborator. The
    /// engine carries it across turns without inspecting it.
    #[serde(default)]
    pub marker: serde_json::Value,
    #[serde(default)]
    pub phase: RefinementPhase,
    /// Epoch seconds of the last save.
    pub updated_at: i64,
}

impl Default for DialogState {
    fn default() -> Self {
        Self {
            marker: serde_json::Value::Null,
            phase: RefinementPhase::Idle,
            updated_at: Utc::now().timestamp(),
        }
    }
}

/// In-process conversation state store.
///
/// Entries are created on first access and live for the process lifetime;
/// an external store may add eviction without changing this contract.
#[derive(Default)]
pub struct ConversationStateStore {
    states: Mutex<HashMap<String, Arc<tokio::sync::Mutex<DialogState>>>>,
}

impl ConversationStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The per-conversation lock entry, created with default state on first
    /// access. The outer map lock is held only long enough to clone the Arc.
    fn entry(&self, conversation_id: &str) -> Arc<tokio::sync::Mutex<DialogState>> {
        let mut states = self.states.lock().unwrap_or_else(|e| e.into_inner());
        states
            .entry(conversation_id.to_string())
            .or_default()
            .clone()
    }

    /// Snapshot of the conversation's state (default on first access).
    pub async fn get(&self, conversation_id: &str) -> DialogState {
        self.entry(conversation_id).lock().await.clone()
    }

    /// Replace the conversation's state. Visible to the next `get` for the
    /// same conversation id, and only that id.
    pub async fn save(&self, conversation_id: &str, state: DialogState) {
        *self.entry(conversation_id).lock().await = state;
    }

    /// Read-modify-write under the per-conversation lock, so a turn's
    /// get/save pair cannot be interleaved by another turn for the same
    /// conversation. Callers must not do blocking work inside `f`.
    pub async fn update<F>(&self, conversation_id: &str, f: F)
    where
        F: FnOnce(&mut DialogState),
    {
        let entry = self.entry(conversation_id);
        let mut state = entry.lock().await;
        f(&mut state);
        state.updated_at = Utc::now().timestamp();
    }
}
