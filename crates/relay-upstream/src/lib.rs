//! Transport layer for the external workflow engine.
//!
//! Issues exactly one HTTP POST per relayed submission and hands the raw
//! status + body text back; it knows nothing about demo-specific
//! schemas.

pub mod client;
pub mod config;

pub use client::{RawResponse, WorkflowClient};
pub use config::EngineConfig;
