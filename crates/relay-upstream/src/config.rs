//! Engine configuration.
//!
//! One process-wide base address for the external workflow engine, read
//! once and injected into the client at construction. A missing address
//! is a configuration error surfaced as a transport failure at call
//! time, never a crash.

/// Environment variable holding the engine base URL
/// (e.g. `https://workflows.example.dev/webhook`).
pub const ENGINE_URL_VAR: &str = "WORKFLOW_ENGINE_URL";

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Base URL of the workflow engine; `None` when unconfigured.
    pub base_url: Option<String>,
}

impl EngineConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }

    /// Read the base URL from the environment. An unset or empty
    /// variable yields an unconfigured client, not an error.
    pub fn from_env() -> Self {
        let base_url = std::env::var(ENGINE_URL_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty());
        if base_url.is_none() {
            tracing::warn!(
                var = ENGINE_URL_VAR,
                "workflow engine URL not configured; relay calls will fail"
            );
        }
        Self { base_url }
    }
}
