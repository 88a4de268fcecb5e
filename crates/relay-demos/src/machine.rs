//! The shared submission state machine.

use relay_core::Envelope;
use serde::de::DeserializeOwned;

/// Lifecycle of one demo surface: re-entrant, at most one in-flight
/// submission. A new submission from `Success` or `Failure` re-enters
/// `Submitting`; concurrent submissions are rejected, not queued.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState<T> {
    Idle,
    Submitting,
    Success(T),
    Failure(String),
}

impl<T> SubmitState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmitState::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    /// The stored result, when the last submission succeeded.
    pub fn result(&self) -> Option<&T> {
        match self {
            SubmitState::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The stored error, when the last submission failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            SubmitState::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Enter `Submitting` unless a submission is already in flight.
    /// The previous result or error is discarded on entry.
    pub fn try_begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = SubmitState::Submitting;
        true
    }

    /// Leave `Submitting` with the outcome of the exchange.
    pub fn finish(&mut self, outcome: Result<T, String>) {
        *self = match outcome {
            Ok(value) => SubmitState::Success(value),
            Err(message) => SubmitState::Failure(message),
        };
    }
}

impl<T> Default for SubmitState<T> {
    fn default() -> Self {
        SubmitState::Idle
    }
}

/// Resolve an envelope into the demo's typed result.
///
/// A success envelope whose data does not match the expected shape is a
/// failure (the upstream workflow drifted), never a panic.
pub fn project_payload<T: DeserializeOwned>(envelope: Envelope) -> Result<T, String> {
    if !envelope.success {
        return Err(envelope.error_message().to_string());
    }
    let data = envelope
        .data
        .ok_or_else(|| "Unknown error".to_string())?;
    serde_json::from_value(data).map_err(|err| {
        tracing::warn!(%err, "upstream payload did not match expected shape");
        format!("unexpected response payload: {err}")
    })
}
