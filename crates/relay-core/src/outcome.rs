//! Response normalization: classify one raw HTTP exchange before any
//! business logic sees it.
//!
//! The upstream engine is externally operated and its workflows can be
//! reconfigured independently of this codebase, so the normalizer has to
//! tolerate response-shape drift without losing error visibility.

use crate::envelope::Envelope;
use crate::error::RelayError;
use serde_json::{json, Value};

/// Internal result of normalizing one HTTP exchange. Created per call,
/// folded into an [`Envelope`] and discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamOutcome {
    /// 2xx with a parseable JSON body.
    JsonBody(Value),
    /// 2xx with a non-empty body that is not JSON. Valid plain-text
    /// answer, not malformed input.
    TextBody(String),
    /// Non-2xx status or empty body.
    Failure {
        reason: String,
        status: Option<u16>,
    },
}

/// Classify a raw status + body text. The order of checks is the
/// contract: status range first, then emptiness, then JSON parse.
pub fn normalize(status: u16, body: &str) -> UpstreamOutcome {
    if !(200..=299).contains(&status) {
        return UpstreamOutcome::Failure {
            reason: RelayError::UpstreamStatus(status).to_string(),
            status: Some(status),
        };
    }

    if body.trim().is_empty() {
        return UpstreamOutcome::Failure {
            reason: RelayError::EmptyResponse.to_string(),
            status: None,
        };
    }

    match serde_json::from_str::<Value>(body) {
        Ok(value) => UpstreamOutcome::JsonBody(value),
        Err(err) => {
            tracing::debug!(%err, body_len = body.len(), "upstream body is not JSON, wrapping as text");
            UpstreamOutcome::TextBody(body.to_string())
        }
    }
}

impl UpstreamOutcome {
    /// Fold the outcome into the gateway's own envelope.
    ///
    /// `structured_only` marks capabilities whose answers are always
    /// JSON; for those a `TextBody` is a failure, not a valid reply.
    pub fn into_envelope(self, structured_only: bool) -> Envelope {
        match self {
            UpstreamOutcome::JsonBody(value) => unwrap_upstream_envelope(value),
            UpstreamOutcome::TextBody(_) if structured_only => {
                Envelope::fail(RelayError::MalformedJson.to_string())
            }
            UpstreamOutcome::TextBody(text) => Envelope::ok(json!({ "response": text })),
            UpstreamOutcome::Failure { reason, .. } => Envelope::fail(reason),
        }
    }
}

/// The upstream sometimes wraps its payload in its own `{success, data}`
/// layer. The gateway never forwards that ambiguous nested envelope:
/// a recognized wrapper is unwrapped and re-expressed as our own.
fn unwrap_upstream_envelope(value: Value) -> Envelope {
    let Some(success) = value.get("success").and_then(Value::as_bool) else {
        return Envelope::ok(value);
    };

    if success {
        match value.get("data") {
            Some(data) => Envelope::ok(data.clone()),
            None => Envelope::ok(value),
        }
    } else {
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error");
        Envelope::fail(message)
    }
}
