//! Assistant responder seam.
//!
//! The workspace core never invokes a real model; this trait is the
//! boundary where an inference backend would plug in. The shipped
//! implementation is the scripted responder in `opsdeck-application`.

use async_trait::async_trait;

use super::department::Department;
use super::message::MessageAction;
use crate::error::Result;

/// An assistant's reply to a user prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub text: String,
    pub actions: Vec<MessageAction>,
}

impl AssistantReply {
    pub fn new(text: impl Into<String>, actions: Vec<MessageAction>) -> Self {
        Self {
            text: text.into(),
            actions,
        }
    }
}

/// Produces assistant replies for a department's conversation.
#[async_trait]
pub trait AssistantResponder: Send + Sync {
    /// Produces a reply to `prompt` in the context of `department`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot produce a reply; callers
    /// log and drop the reply rather than surfacing an error message.
    async fn respond(&self, department: Department, prompt: &str) -> Result<AssistantReply>;
}
