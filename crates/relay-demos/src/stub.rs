//! Canned [`RelayApi`] backend for controller tests.

use async_trait::async_trait;
use relay_core::{
    ChatRequest, DocQaRequest, EmailRequest, Envelope, ExtractRequest, PhishingRequest, RelayApi,
};
use serde_json::Value;
use std::sync::Arc;

pub struct StubRelay {
    envelope: Envelope,
}

impl StubRelay {
    pub fn ok(data: Value) -> Arc<Self> {
        Arc::new(Self {
            envelope: Envelope::ok(data),
        })
    }

    pub fn fail(message: &str) -> Arc<Self> {
        Arc::new(Self {
            envelope: Envelope::fail(message),
        })
    }
}

#[async_trait]
impl RelayApi for StubRelay {
    async fn chat(&self, _req: ChatRequest) -> Envelope {
        self.envelope.clone()
    }

    async fn classify_email(&self, _req: EmailRequest) -> Envelope {
        self.envelope.clone()
    }

    async fn extract_data(&self, _req: ExtractRequest) -> Envelope {
        self.envelope.clone()
    }

    async fn document_qa(&self, _req: DocQaRequest) -> Envelope {
        self.envelope.clone()
    }

    async fn detect_phishing(&self, _req: PhishingRequest) -> Envelope {
        self.envelope.clone()
    }
}
