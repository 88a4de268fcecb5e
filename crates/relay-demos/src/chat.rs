//! Chat demo controller.

use crate::machine::SubmitState;
use relay_core::{ChatRequest, ChatReply, RelayApi};
use std::sync::Arc;

/// The loosest demo: whatever JSON the chat workflow returns is
/// projected into a displayable reply string.
pub struct ChatDemo {
    api: Arc<dyn RelayApi>,
    state: SubmitState<ChatReply>,
}

impl ChatDemo {
    pub fn new(api: Arc<dyn RelayApi>) -> Self {
        Self {
            api,
            state: SubmitState::default(),
        }
    }

    pub fn state(&self) -> &SubmitState<ChatReply> {
        &self.state
    }

    pub fn reply(&self) -> Option<&str> {
        self.state.result().map(|r| r.response.as_str())
    }

    pub async fn submit(&mut self, message: &str) {
        // Empty input is ignored, same as the disabled send button.
        if message.trim().is_empty() || !self.state.try_begin() {
            return;
        }

        let envelope = self.api.chat(ChatRequest::new(message)).await;
        let outcome = if envelope.success {
            match envelope.data {
                Some(data) => Ok(ChatReply::from_payload(&data)),
                None => Err("Unknown error".to_string()),
            }
        } else {
            Err(envelope.error_message().to_string())
        };
        self.state.finish(outcome);
    }
}
