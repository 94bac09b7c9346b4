//! Drives the simulated assistant conversation flow.

use std::sync::Arc;
use std::time::Duration;

use opsdeck_core::WorkspaceStore;
use opsdeck_core::chat::{AssistantResponder, Department, MessageDraft};
use opsdeck_core::config::AssistantConfig;

/// Application service that turns user input into a chat exchange.
///
/// The user message is appended to the department's session
/// immediately; the assistant reply lands after the configured typing
/// delay, produced by whatever [`AssistantResponder`] is plugged in.
/// Responder failures are logged and dropped, never surfaced as chat
/// messages.
pub struct AssistantService {
    store: WorkspaceStore,
    responder: Arc<dyn AssistantResponder>,
    typing_delay: Duration,
}

impl AssistantService {
    /// Creates a service over the shared store and a responder backend.
    pub fn new(
        store: WorkspaceStore,
        responder: Arc<dyn AssistantResponder>,
        config: &AssistantConfig,
    ) -> Self {
        Self {
            store,
            responder,
            typing_delay: config.typing_delay(),
        }
    }

    /// Sends a user message and schedules the assistant's reply.
    ///
    /// Blank input is absorbed as a no-op, mirroring the send button
    /// being disabled for empty drafts.
    ///
    /// # Returns
    ///
    /// The id of the appended user message, or `None` for blank input.
    pub async fn send_user_message(&self, department: Department, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let message_id = self
            .store
            .append_chat_message(department, MessageDraft::user(text))
            .await;

        let store = self.store.clone();
        let responder = Arc::clone(&self.responder);
        let typing_delay = self.typing_delay;
        let prompt = text.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(typing_delay).await;
            match responder.respond(department, &prompt).await {
                Ok(reply) => {
                    store
                        .append_chat_message(
                            department,
                            MessageDraft::assistant(reply.text, reply.actions),
                        )
                        .await;
                }
                Err(error) => {
                    tracing::warn!(%department, %error, "assistant responder failed");
                }
            }
        });

        Some(message_id)
    }
}
