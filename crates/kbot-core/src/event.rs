//! Inbound events as delivered by the channel transport.
//!
//! The transport layer is an external collaborator; it hands the engine one
//! `InboundEvent` per turn and delivers whatever payloads come back. The
//! engine only classifies the event kind and reads the fields it needs.

use serde::{Deserialize, Serialize};

/// What kind of activity arrived on the channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// A user utterance.
    Message,
    /// Conversation membership changed (members added).
    ConversationUpdate,
    /// Any event type the engine does not handle; carries the channel's
    /// name for it so the acknowledgment can echo it back.
    Other { name: String },
}

/// A party in the conversation, as identified by the channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelAccount {
    pub id: String,
}

/// One inbound activity from the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    pub kind: EventKind,
    /// Utterance text for message events.
    #[serde(default)]
    pub text: Option<String>,
    /// Newly added members for conversation-update events.
    #[serde(default)]
    pub members_added: Vec<ChannelAccount>,
    /// The bot's own id on this channel.
    pub recipient_id: String,
    /// Keys the conversation state store.
    pub conversation_id: String,
}

impl InboundEvent {
    /// Build a message event.
    pub fn message(text: impl Into<String>, conversation_id: &str, recipient_id: &str) -> Self {
        Self {
            kind: EventKind::Message,
            text: Some(text.into()),
            members_added: Vec::new(),
            recipient_id: recipient_id.to_string(),
            conversation_id: conversation_id.to_string(),
        }
    }

    /// Build a conversation-update event with the given new members.
    pub fn members_added(
        members: Vec<ChannelAccount>,
        conversation_id: &str,
        recipient_id: &str,
    ) -> Self {
        Self {
            kind: EventKind::ConversationUpdate,
            text: None,
            members_added: members,
            recipient_id: recipient_id.to_string(),
            conversation_id: conversation_id.to_string(),
        }
    }

    /// Build an event of a kind the engine does not handle.
    pub fn other(name: impl Into<String>, conversation_id: &str, recipient_id: &str) -> Self {
        Self {
            kind: EventKind::Other { name: name.into() },
            text: None,
            members_added: Vec::new(),
            recipient_id: recipient_id.to_string(),
            conversation_id: conversation_id.to_string(),
        }
    }

    /// Utterance text, treating an absent body as the empty string.
    ///
    /// The query path passes text through verbatim with no validation, so
    /// "no text" and "empty text" are deliberately the same thing here.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}
