//! The document-QA conversation log.

use chrono::{DateTime, Utc};
use relay_core::SourceRef;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a transcript entry. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One append-only log entry. The log is owned exclusively by the QA
/// controller and grows monotonically for the session; nothing is
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content, Vec::new())
    }

    pub fn assistant(content: impl Into<String>, sources: Vec<SourceRef>) -> Self {
        Self::new(Role::Assistant, content, sources)
    }

    fn new(role: Role, content: impl Into<String>, sources: Vec<SourceRef>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            sources,
            timestamp: Utc::now(),
        }
    }
}
