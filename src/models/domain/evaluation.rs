use serde::{Deserialize, Serialize};

/// The closed feedback taxonomy. Every critique item is reduced to one of
/// these before it reaches storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackType {
    Caution,
    Suggestion,
    Other,
}

impl FeedbackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackType::Caution => "Caution",
            FeedbackType::Suggestion => "Suggestion",
            FeedbackType::Other => "Other",
        }
    }

    /// Case-insensitive match against the canonical tags. Returns None for
    /// anything else so the caller can fall back to heuristic classification.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "caution" => Some(FeedbackType::Caution),
            "suggestion" => Some(FeedbackType::Suggestion),
            "other" => Some(FeedbackType::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One critique item as the model emitted it. The completion service
/// enforces no schema, so every field is optional here; the weakness
/// extractor normalizes items before anything is persisted. Older model
/// output carried a single free-form `comment` instead of the
/// type/issue/correction triple.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackDetail {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl FeedbackDetail {
    pub fn structured(kind: FeedbackType, issue: &str, correction: &str) -> Self {
        FeedbackDetail {
            kind: Some(kind.as_str().to_string()),
            issue: Some(issue.to_string()),
            correction: Some(correction.to_string()),
            comment: None,
        }
    }

    pub fn legacy(comment: &str) -> Self {
        FeedbackDetail {
            comment: Some(comment.to_string()),
            ..Default::default()
        }
    }
}

/// The mode-specific reference answer. Exactly one field per mode, with a
/// name unique to that mode; flattening keeps the stored document shape flat
/// ({"reference_translation": "..."}), matching what earlier data files hold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Reference {
    #[serde(rename = "correct_answer")]
    CorrectAnswer(String),
    #[serde(rename = "reference_translation")]
    ReferenceTranslation(String),
    #[serde(rename = "suggested_words")]
    SuggestedWords(Vec<String>),
    #[serde(rename = "reference_sentence")]
    ReferenceSentence(String),
    #[serde(rename = "reference_answer")]
    ReferenceAnswer(String),
    #[serde(rename = "reference_paraphrase")]
    ReferenceParaphrase(String),
    #[serde(rename = "suggested_points")]
    SuggestedPoints(Vec<String>),
}

impl Reference {
    pub fn field_name(&self) -> &'static str {
        match self {
            Reference::CorrectAnswer(_) => "correct_answer",
            Reference::ReferenceTranslation(_) => "reference_translation",
            Reference::SuggestedWords(_) => "suggested_words",
            Reference::ReferenceSentence(_) => "reference_sentence",
            Reference::ReferenceAnswer(_) => "reference_answer",
            Reference::ReferenceParaphrase(_) => "reference_paraphrase",
            Reference::SuggestedPoints(_) => "suggested_points",
        }
    }
}

/// One full critique of an answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub summary: String,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(flatten)]
    pub reference: Reference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_score_expression: Option<String>,
    #[serde(default)]
    pub details: Vec<FeedbackDetail>,
}
