//! Data extractor demo controller.

use crate::machine::{project_payload, SubmitState};
use crate::projection::ConfidenceBucket;
use relay_core::{ExtractRequest, ExtractionResult, RelayApi};
use std::sync::Arc;

pub struct DataExtractorDemo {
    api: Arc<dyn RelayApi>,
    state: SubmitState<ExtractionResult>,
}

impl DataExtractorDemo {
    pub fn new(api: Arc<dyn RelayApi>) -> Self {
        Self {
            api,
            state: SubmitState::default(),
        }
    }

    pub fn state(&self) -> &SubmitState<ExtractionResult> {
        &self.state
    }

    pub fn result(&self) -> Option<&ExtractionResult> {
        self.state.result()
    }

    pub async fn submit(&mut self, text_content: &str) {
        if text_content.trim().is_empty() {
            self.state =
                SubmitState::Failure("Please enter text content to extract".to_string());
            return;
        }
        if !self.state.try_begin() {
            return;
        }

        let envelope = self
            .api
            .extract_data(ExtractRequest::new(text_content))
            .await;
        self.state.finish(project_payload(envelope));
    }

    pub fn confidence(&self) -> Option<ConfidenceBucket> {
        self.result()
            .map(|r| ConfidenceBucket::from_color(&r.confidence_color))
    }
}
