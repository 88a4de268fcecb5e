//! Document QA demo controller.
//!
//! The one state machine with durable-within-session history: every
//! submission appends to the transcript, a user message on entering
//! `Submitting` and an assistant (or error) message on exit.

use crate::machine::{project_payload, SubmitState};
use crate::transcript::TranscriptMessage;
use relay_core::{DocQaAnswer, DocQaRequest, RelayApi};
use std::sync::Arc;

pub struct DocumentQaDemo {
    api: Arc<dyn RelayApi>,
    state: SubmitState<DocQaAnswer>,
    transcript: Vec<TranscriptMessage>,
}

impl DocumentQaDemo {
    pub fn new(api: Arc<dyn RelayApi>) -> Self {
        Self {
            api,
            state: SubmitState::default(),
            transcript: Vec::new(),
        }
    }

    pub fn state(&self) -> &SubmitState<DocQaAnswer> {
        &self.state
    }

    /// The append-only conversation log.
    pub fn transcript(&self) -> &[TranscriptMessage] {
        &self.transcript
    }

    pub async fn ask(&mut self, query: &str) {
        // Empty input is ignored, same as the disabled submit control.
        if query.trim().is_empty() || !self.state.try_begin() {
            return;
        }

        self.transcript.push(TranscriptMessage::user(query));

        let envelope = self.api.document_qa(DocQaRequest::new(query)).await;
        match project_payload::<DocQaAnswer>(envelope) {
            Ok(answer) => {
                self.transcript.push(TranscriptMessage::assistant(
                    &answer.answer,
                    answer.sources.clone(),
                ));
                self.state.finish(Ok(answer));
            }
            Err(message) => {
                self.transcript
                    .push(TranscriptMessage::assistant(&message, Vec::new()));
                self.state.finish(Err(message));
            }
        }
    }
}
