//! Per-demo result state machines.
//!
//! Each demo surface owns one controller driving
//! `Idle → Submitting → Success | Failure` and projecting the stored
//! result into the fields its view needs. Controllers talk to the
//! gateway only through [`relay_core::RelayApi`], so every one of them
//! is testable against a stub backend.

pub mod chat;
pub mod docqa;
pub mod email;
pub mod extract;
pub mod machine;
pub mod phishing;
pub mod projection;
pub mod transcript;

pub use chat::ChatDemo;
pub use docqa::DocumentQaDemo;
pub use email::EmailClassifierDemo;
pub use extract::DataExtractorDemo;
pub use machine::SubmitState;
pub use phishing::PhishingDemo;
pub use projection::{ConfidenceBucket, PriorityRank, SentimentTone, ThreatBucket};
pub use transcript::{Role, TranscriptMessage};

#[cfg(test)]
pub(crate) mod stub;
