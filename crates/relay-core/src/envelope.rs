//! Envelope: the uniform contract every gateway endpoint returns.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform success/error wrapper returned to every caller.
///
/// Invariant: exactly one of `data` / `error` is present, gated by
/// `success`. Construct through [`Envelope::ok`] and [`Envelope::fail`]
/// to keep that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    /// Successful relay carrying the normalized upstream payload.
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed relay carrying a human-readable message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Checks the data/error exclusivity invariant.
    pub fn is_wellformed(&self) -> bool {
        match self.success {
            true => self.data.is_some() && self.error.is_none(),
            false => self.data.is_none() && self.error.is_some(),
        }
    }

    /// The error message, or a fixed fallback when absent.
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("Unknown error")
    }
}
