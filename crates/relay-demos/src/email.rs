//! Email classifier demo controller.

use crate::machine::{project_payload, SubmitState};
use crate::projection::{category_badge_color, PriorityRank, SentimentTone};
use relay_core::{EmailAnalysis, EmailRequest, RelayApi};
use std::sync::Arc;

pub struct EmailClassifierDemo {
    api: Arc<dyn RelayApi>,
    state: SubmitState<EmailAnalysis>,
}

impl EmailClassifierDemo {
    pub fn new(api: Arc<dyn RelayApi>) -> Self {
        Self {
            api,
            state: SubmitState::default(),
        }
    }

    pub fn state(&self) -> &SubmitState<EmailAnalysis> {
        &self.state
    }

    pub fn analysis(&self) -> Option<&EmailAnalysis> {
        self.state.result()
    }

    pub async fn submit(&mut self, email_text: &str) {
        if email_text.trim().is_empty() {
            self.state = SubmitState::Failure("Please enter email content".to_string());
            return;
        }
        if !self.state.try_begin() {
            return;
        }

        let envelope = self.api.classify_email(EmailRequest::new(email_text)).await;
        self.state.finish(project_payload(envelope));
    }

    pub fn priority(&self) -> Option<PriorityRank> {
        self.analysis()
            .map(|a| PriorityRank::from_label(&a.classification.priority))
    }

    pub fn sentiment(&self) -> Option<SentimentTone> {
        self.analysis()
            .map(|a| SentimentTone::from_label(&a.classification.sentiment))
    }

    pub fn category_color(&self) -> Option<&'static str> {
        self.analysis()
            .map(|a| category_badge_color(&a.classification.category_color))
    }
}
