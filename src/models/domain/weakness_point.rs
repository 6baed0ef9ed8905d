use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{FeedbackType, WritingMode};

/// One normalized unit of corrective feedback.
///
/// `record_id` is a weak back-reference to the practice record whose
/// critique produced this point; points written before record linkage
/// existed have none.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeaknessPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: FeedbackType,
    pub issue: String,
    pub correction: String,
    pub mode: WritingMode,
    pub timestamp: DateTime<Utc>,
}

impl WeaknessPoint {
    pub fn new(
        record_id: Option<String>,
        kind: FeedbackType,
        issue: String,
        correction: String,
        mode: WritingMode,
    ) -> Self {
        WeaknessPoint {
            record_id,
            kind,
            issue,
            correction,
            mode,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_serializes_with_canonical_tag() {
        let point = WeaknessPoint::new(
            Some("rec-1".to_string()),
            FeedbackType::Caution,
            "book".to_string(),
            "a book".to_string(),
            WritingMode::Translation,
        );

        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["type"], serde_json::json!("Caution"));
        assert_eq!(json["mode"], serde_json::json!("Translation"));
        assert_eq!(json["record_id"], serde_json::json!("rec-1"));
    }

    #[test]
    fn record_id_is_optional_on_deserialize() {
        let json = r#"{
            "type": "Suggestion",
            "issue": "good",
            "correction": "beneficial",
            "mode": "Word Upgrading",
            "timestamp": "2024-05-01T08:00:00Z"
        }"#;
        let parsed: WeaknessPoint = serde_json::from_str(json).unwrap();
        assert!(parsed.record_id.is_none());
        assert_eq!(parsed.kind, FeedbackType::Suggestion);
    }
}
