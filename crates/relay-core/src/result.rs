//! Typed per-capability result payloads.
//!
//! Upstream JSON is dynamic; these types make the expected shape
//! explicit, with required fields rejected when absent and everything
//! else defaulted. Field names mirror the wire format (camelCase for the
//! classifier/extractor/QA workflows, snake_case for the phishing one).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Upstream-populated provenance block, passed through unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    pub timestamp: String,
    pub processing_time: String,
    pub model: String,
}

/// Chat: the loosest contract of the five.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

impl ChatReply {
    /// Project a reply out of whatever the chat workflow returned:
    /// a `response` string when present, otherwise the serialized data.
    pub fn from_payload(data: &Value) -> Self {
        let response = match data.get("response").and_then(Value::as_str) {
            Some(text) => text.to_string(),
            None => data.to_string(),
        };
        Self { response }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Classification {
    pub category: String,
    pub category_label: String,
    pub category_color: String,
    pub priority: String,
    pub priority_label: String,
    pub sentiment: String,
    pub sentiment_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAnalysis {
    #[serde(default)]
    pub original: String,
    pub classification: Classification,
    pub summary: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub draft_reply: String,
    #[serde(default)]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractionStatistics {
    pub fields_extracted: u32,
    pub total_fields_found: u32,
    pub text_length: u32,
    pub extraction_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    #[serde(default)]
    pub original: String,
    #[serde(rename = "type", default)]
    pub doc_type: String,
    #[serde(default)]
    pub type_label: String,
    #[serde(default)]
    pub confidence: String,
    #[serde(default)]
    pub confidence_color: String,
    pub extracted: BTreeMap<String, Value>,
    #[serde(default)]
    pub raw_fields: BTreeMap<String, Value>,
    #[serde(default)]
    pub statistics: ExtractionStatistics,
    #[serde(default)]
    pub metadata: Metadata,
}

/// One cited passage backing a QA answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub document: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocQaAnswer {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
    #[serde(default)]
    pub documents_used: Vec<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerdictSummary {
    pub is_phishing: bool,
    pub confidence: String,
    pub phishing_score_percent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MlAnalysis {
    pub prediction_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhishingVerdict {
    pub verdict: VerdictSummary,
    pub ml_analysis: MlAnalysis,
    #[serde(default)]
    pub ai_explanation: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_reply_prefers_response_field() {
        let reply = ChatReply::from_payload(&json!({"response": "hi there"}));
        assert_eq!(reply.response, "hi there");
    }

    #[test]
    fn test_chat_reply_falls_back_to_serialized_data() {
        let reply = ChatReply::from_payload(&json!({"output": "something else"}));
        assert_eq!(reply.response, "{\"output\":\"something else\"}");
    }

    #[test]
    fn test_email_analysis_parses_full_payload() {
        let data = json!({
            "original": "Hi, is the Pro plan refundable?",
            "classification": {
                "category": "potential_customer",
                "categoryLabel": "Potential Customer",
                "categoryColor": "green",
                "priority": "high",
                "priorityLabel": "High Priority",
                "sentiment": "positive",
                "sentimentLabel": "Positive"
            },
            "summary": "Prospect asking about refunds.",
            "keyPoints": ["refund question", "Pro plan"],
            "draftReply": "Thanks for reaching out...",
            "metadata": {"timestamp": "2024-01-01T00:00:00Z", "processingTime": "1.2s", "model": "llama3"}
        });
        let analysis: EmailAnalysis = serde_json::from_value(data).unwrap();
        assert_eq!(analysis.classification.priority, "high");
        assert_eq!(analysis.key_points.len(), 2);
        assert_eq!(analysis.metadata.model, "llama3");
    }

    #[test]
    fn test_email_analysis_requires_summary() {
        let data = json!({"classification": {}});
        assert!(serde_json::from_value::<EmailAnalysis>(data).is_err());
    }

    #[test]
    fn test_extraction_requires_extracted_map() {
        assert!(serde_json::from_value::<ExtractionResult>(json!({"type": "invoice"})).is_err());

        let result: ExtractionResult = serde_json::from_value(json!({
            "type": "business_card",
            "extracted": {"name": "Ada", "phone": "555-0100"},
            "statistics": {"fieldsExtracted": 2, "totalFieldsFound": 2, "textLength": 40, "extractionRate": 100.0}
        }))
        .unwrap();
        assert_eq!(result.doc_type, "business_card");
        assert_eq!(result.statistics.fields_extracted, 2);
    }

    #[test]
    fn test_docqa_answer_requires_answer() {
        assert!(serde_json::from_value::<DocQaAnswer>(json!({"sources": []})).is_err());

        let answer: DocQaAnswer = serde_json::from_value(json!({
            "answer": "Refunds within 30 days.",
            "sources": [{"document": "Refund Policy", "excerpt": "Within 30 days..."}],
            "documentsUsed": ["Refund Policy"]
        }))
        .unwrap();
        assert_eq!(answer.sources.len(), 1);
        assert_eq!(answer.sources[0].document, "Refund Policy");
    }

    #[test]
    fn test_phishing_verdict_snake_case_wire_format() {
        let verdict: PhishingVerdict = serde_json::from_value(json!({
            "verdict": {"is_phishing": true, "confidence": "HIGH", "phishing_score_percent": "92%"},
            "ml_analysis": {"prediction_class": "PHISHING"},
            "ai_explanation": "Lookalike domain.",
            "recommendations": ["Do not click the link"]
        }))
        .unwrap();
        assert!(verdict.verdict.is_phishing);
        assert_eq!(verdict.ml_analysis.prediction_class, "PHISHING");
    }

    #[test]
    fn test_phishing_verdict_requires_verdict_blocks() {
        assert!(
            serde_json::from_value::<PhishingVerdict>(json!({"ai_explanation": "x"})).is_err()
        );
    }
}
