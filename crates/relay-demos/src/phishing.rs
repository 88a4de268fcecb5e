//! Phishing detection demo controller.

use crate::machine::{project_payload, SubmitState};
use crate::projection::ThreatBucket;
use relay_core::{PhishingRequest, PhishingVerdict, RelayApi};
use std::sync::Arc;

pub struct PhishingDemo {
    api: Arc<dyn RelayApi>,
    state: SubmitState<PhishingVerdict>,
}

impl PhishingDemo {
    pub fn new(api: Arc<dyn RelayApi>) -> Self {
        Self {
            api,
            state: SubmitState::default(),
        }
    }

    pub fn state(&self) -> &SubmitState<PhishingVerdict> {
        &self.state
    }

    pub fn verdict(&self) -> Option<&PhishingVerdict> {
        self.state.result()
    }

    pub async fn analyze(&mut self, url: &str, email_content: Option<&str>) {
        if url.trim().is_empty() {
            self.state = SubmitState::Failure("Please enter a URL".to_string());
            return;
        }
        if !self.state.try_begin() {
            return;
        }

        let mut req = PhishingRequest::new(url);
        if let Some(content) = email_content {
            req = req.with_email_content(content);
        }
        let envelope = self.api.detect_phishing(req).await;
        self.state.finish(project_payload(envelope));
    }

    /// Display bucket for the last verdict, selected deterministically
    /// from the upstream prediction class.
    pub fn threat(&self) -> Option<ThreatBucket> {
        self.verdict()
            .map(|v| ThreatBucket::from_prediction_class(&v.ml_analysis.prediction_class))
    }
}
