//! The generic gateway endpoint: validate, call the transport client,
//! normalize, fold into an Envelope. Implemented once and reused by all
//! five capabilities.

use async_trait::async_trait;
use axum::http::StatusCode;
use relay_core::{
    normalize, ChatRequest, DemoRequest, DocQaRequest, EmailRequest, Envelope, ExtractRequest,
    PhishingRequest, RelayApi,
};
use relay_upstream::WorkflowClient;

/// Binds the transport client to the relay contract. One exchange per
/// user action: a failed upstream call is never retried.
pub struct Gateway {
    client: WorkflowClient,
}

impl Gateway {
    pub fn new(client: WorkflowClient) -> Self {
        Self { client }
    }

    /// Relay one demo request and report the HTTP status the caller
    /// should see: 200 success, 400 validation, 500 everything else.
    pub async fn relay<R: DemoRequest>(&self, req: &R) -> (StatusCode, Envelope) {
        let capability = R::CAPABILITY;

        if let Err(err) = req.validate() {
            return (StatusCode::BAD_REQUEST, Envelope::fail(err.to_string()));
        }

        let raw = match self.client.send(capability.webhook_route(), req).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(%capability, %err, "transport failure");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Envelope::fail(err.to_string()),
                );
            }
        };

        let envelope = normalize(raw.status, &raw.body).into_envelope(R::STRUCTURED_ONLY);
        if envelope.success {
            tracing::debug!(%capability, upstream_status = raw.status, "relay succeeded");
            (StatusCode::OK, envelope)
        } else {
            tracing::warn!(
                %capability,
                upstream_status = raw.status,
                error = envelope.error_message(),
                "relay failed"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, envelope)
        }
    }
}

#[async_trait]
impl RelayApi for Gateway {
    async fn chat(&self, req: ChatRequest) -> Envelope {
        self.relay(&req).await.1
    }

    async fn classify_email(&self, req: EmailRequest) -> Envelope {
        self.relay(&req).await.1
    }

    async fn extract_data(&self, req: ExtractRequest) -> Envelope {
        self.relay(&req).await.1
    }

    async fn document_qa(&self, req: DocQaRequest) -> Envelope {
        self.relay(&req).await.1
    }

    async fn detect_phishing(&self, req: PhishingRequest) -> Envelope {
        self.relay(&req).await.1
    }
}
