//! Unified Error Model
use thiserror::Error;

/// Everything that can go wrong while relaying one submission.
///
/// Every variant is flattened into the Envelope's `error` string at the
/// gateway boundary; callers never see a raw error. Nothing is fatal to
/// the process; a failure is scoped to one submission.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Empty or missing primary input; detected before any network call.
    #[error("{0}")]
    Validation(String),

    /// The network call itself could not complete (DNS, refused, abort).
    /// Distinct from an HTTP error status, which is a successful
    /// transport with a non-2xx status.
    #[error("{0}")]
    Transport(String),

    /// Upstream answered with a non-2xx status.
    #[error("upstream returned {0}")]
    UpstreamStatus(u16),

    /// Upstream answered 2xx with an empty or all-whitespace body.
    #[error("upstream returned empty response")]
    EmptyResponse,

    /// Non-JSON body on a capability that requires structured output.
    #[error("upstream returned invalid JSON")]
    MalformedJson,
}

impl RelayError {
    /// Whether the failure was caught locally before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, RelayError::Validation(_))
    }
}
