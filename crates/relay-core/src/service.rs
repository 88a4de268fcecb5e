//! Service seam between the state machines and the gateway.

use crate::envelope::Envelope;
use crate::request::{ChatRequest, DocQaRequest, EmailRequest, ExtractRequest, PhishingRequest};
use async_trait::async_trait;

/// One method per gateway endpoint. Implemented by the gateway itself
/// and by test stubs; state machines only ever see an [`Envelope`],
/// never a raw error.
#[async_trait]
pub trait RelayApi: Send + Sync {
    async fn chat(&self, req: ChatRequest) -> Envelope;
    async fn classify_email(&self, req: EmailRequest) -> Envelope;
    async fn extract_data(&self, req: ExtractRequest) -> Envelope;
    async fn document_qa(&self, req: DocQaRequest) -> Envelope;
    async fn detect_phishing(&self, req: PhishingRequest) -> Envelope;
}
