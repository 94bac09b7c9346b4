//! Conversation message types.

use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageAuthor {
    /// Message typed by the user.
    User,
    /// Message produced by the assistant.
    Assistant,
}

/// Kind of follow-up action an assistant message can suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Move documents somewhere.
    Move,
    /// Open a detail view.
    View,
    /// Undo the previous simulated operation.
    Undo,
}

/// A suggested follow-up attached to an assistant message.
///
/// Actions are cosmetic in this core; triggering one never mutates the
/// document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAction {
    pub kind: ActionKind,
    pub label: String,
}

impl MessageAction {
    pub fn new(kind: ActionKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }
}

/// A single message in a department's conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Store-assigned id, strictly increasing across all sessions.
    pub id: u64,
    /// The message author.
    pub author: MessageAuthor,
    /// The message text.
    pub text: String,
    /// Timestamp when the message was appended (ISO 8601 format).
    pub timestamp: String,
    /// Suggested follow-up actions, empty for user messages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<MessageAction>,
}

/// Input for appending a message; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub author: MessageAuthor,
    pub text: String,
    pub actions: Vec<MessageAction>,
}

impl MessageDraft {
    /// Draft of a user-authored message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            author: MessageAuthor::User,
            text: text.into(),
            actions: Vec::new(),
        }
    }

    /// Draft of an assistant reply with optional follow-up actions.
    pub fn assistant(text: impl Into<String>, actions: Vec<MessageAction>) -> Self {
        Self {
            author: MessageAuthor::Assistant,
            text: text.into(),
            actions,
        }
    }
}
