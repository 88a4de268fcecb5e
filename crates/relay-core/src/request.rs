//! Per-capability request types and validation.
//!
//! Wire field names follow the upstream workflow engine exactly; each
//! request validates its primary field before any network call.

use crate::error::RelayError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five demo capabilities the gateway relays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    Chat,
    EmailClassifier,
    DataExtractor,
    DocumentQa,
    PhishingDetect,
}

impl Capability {
    /// Route segment on the external workflow engine.
    pub fn webhook_route(&self) -> &'static str {
        match self {
            Capability::Chat => "ai-test",
            Capability::EmailClassifier => "email-classifier",
            Capability::DataExtractor => "data-extractor",
            Capability::DocumentQa => "document-qa",
            Capability::PhishingDetect => "phishing-detect",
        }
    }

    /// Local route exposed to the browser.
    pub fn api_path(&self) -> &'static str {
        match self {
            Capability::Chat => "/api/chat",
            Capability::EmailClassifier => "/api/email-classifier",
            Capability::DataExtractor => "/api/data-extractor",
            Capability::DocumentQa => "/api/document-qa",
            Capability::PhishingDetect => "/api/phishing-detect",
        }
    }

    pub fn all() -> [Capability; 5] {
        [
            Capability::Chat,
            Capability::EmailClassifier,
            Capability::DataExtractor,
            Capability::DocumentQa,
            Capability::PhishingDetect,
        ]
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.webhook_route())
    }
}

/// One relayable demo request: a fixed capability, a serializable body,
/// and a local validation rule enforced before any network traffic.
pub trait DemoRequest: Serialize + Send + Sync {
    const CAPABILITY: Capability;

    /// Capabilities that cannot degrade to a plain-text body.
    const STRUCTURED_ONLY: bool = false;

    /// Rejects empty primary input with the user-facing field message.
    fn validate(&self) -> Result<(), RelayError>;
}

fn require(field: &str, label: &str) -> Result<(), RelayError> {
    if field.trim().is_empty() {
        Err(RelayError::Validation(format!("{label} is required")))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl DemoRequest for ChatRequest {
    const CAPABILITY: Capability = Capability::Chat;

    fn validate(&self) -> Result<(), RelayError> {
        require(&self.message, "Message")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRequest {
    #[serde(rename = "emailText", default)]
    pub email_text: String,
}

impl EmailRequest {
    pub fn new(email_text: impl Into<String>) -> Self {
        Self {
            email_text: email_text.into(),
        }
    }
}

impl DemoRequest for EmailRequest {
    const CAPABILITY: Capability = Capability::EmailClassifier;
    const STRUCTURED_ONLY: bool = true;

    fn validate(&self) -> Result<(), RelayError> {
        require(&self.email_text, "Email text")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRequest {
    #[serde(rename = "textContent", default)]
    pub text_content: String,
}

impl ExtractRequest {
    pub fn new(text_content: impl Into<String>) -> Self {
        Self {
            text_content: text_content.into(),
        }
    }
}

impl DemoRequest for ExtractRequest {
    const CAPABILITY: Capability = Capability::DataExtractor;

    fn validate(&self) -> Result<(), RelayError> {
        require(&self.text_content, "Text content")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocQaRequest {
    #[serde(default)]
    pub query: String,
}

impl DocQaRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl DemoRequest for DocQaRequest {
    const CAPABILITY: Capability = Capability::DocumentQa;
    const STRUCTURED_ONLY: bool = true;

    fn validate(&self) -> Result<(), RelayError> {
        require(&self.query, "Query")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhishingRequest {
    #[serde(default)]
    pub url: String,
    #[serde(rename = "email_content", skip_serializing_if = "Option::is_none")]
    pub email_content: Option<String>,
}

impl PhishingRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            email_content: None,
        }
    }

    pub fn with_email_content(mut self, content: impl Into<String>) -> Self {
        self.email_content = Some(content.into());
        self
    }
}

impl DemoRequest for PhishingRequest {
    const CAPABILITY: Capability = Capability::PhishingDetect;

    fn validate(&self) -> Result<(), RelayError> {
        require(&self.url, "URL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_primary_field_rejected() {
        assert!(ChatRequest::new("").validate().is_err());
        assert!(EmailRequest::new("   ").validate().is_err());
        assert!(ExtractRequest::new("\n\t").validate().is_err());
        assert!(DocQaRequest::new("").validate().is_err());
        assert!(PhishingRequest::new(" ").validate().is_err());
    }

    #[test]
    fn test_validation_messages_match_ui_copy() {
        let err = EmailRequest::new("").validate().unwrap_err();
        assert_eq!(err.to_string(), "Email text is required");
        assert!(err.is_validation());

        let err = DocQaRequest::new("  ").validate().unwrap_err();
        assert_eq!(err.to_string(), "Query is required");
    }

    #[test]
    fn test_nonempty_input_accepted() {
        assert!(ChatRequest::new("hello").validate().is_ok());
        assert!(PhishingRequest::new("http://paypa1-secure.xyz/login")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_wire_field_names() {
        let body = serde_json::to_value(EmailRequest::new("hi")).unwrap();
        assert_eq!(body, json!({"emailText": "hi"}));

        let body = serde_json::to_value(ExtractRequest::new("card")).unwrap();
        assert_eq!(body, json!({"textContent": "card"}));

        let body = serde_json::to_value(
            PhishingRequest::new("http://x.test").with_email_content("URGENT"),
        )
        .unwrap();
        assert_eq!(
            body,
            json!({"url": "http://x.test", "email_content": "URGENT"})
        );
    }

    #[test]
    fn test_missing_field_deserializes_to_empty() {
        // The browser may omit the field entirely; that must become a
        // validation failure, not a deserialization error.
        let req: EmailRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_capability_routes() {
        assert_eq!(Capability::Chat.webhook_route(), "ai-test");
        assert_eq!(Capability::DocumentQa.api_path(), "/api/document-qa");
        assert_eq!(Capability::all().len(), 5);
    }
}
