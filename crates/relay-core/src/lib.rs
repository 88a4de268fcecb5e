//! Relay Core: Envelope, Normalization, Request/Result Types
//!
//! Pure domain layer shared by the transport client, the gateway
//! endpoints, and the per-demo state machines. No I/O happens here.

pub mod envelope;
pub mod error;
pub mod outcome;
pub mod request;
pub mod result;
pub mod service;

pub use envelope::Envelope;
pub use error::RelayError;
pub use outcome::{normalize, UpstreamOutcome};
pub use request::{
    Capability, ChatRequest, DemoRequest, DocQaRequest, EmailRequest, ExtractRequest,
    PhishingRequest,
};
pub use result::{
    ChatReply, Classification, DocQaAnswer, EmailAnalysis, ExtractionResult, Metadata,
    PhishingVerdict, SourceRef,
};
pub use service::RelayApi;

/// Version of the relay engine
pub const RELAY_VERSION: &str = "1.0.0";
