use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{EvaluationResult, Question, WritingMode};

/// One generate→answer→evaluate cycle. Created once on submission;
/// thereafter only the `evaluation` field changes, replaced in place by a
/// re-evaluation. `evaluation` is optional at rest solely because records
/// written by earlier versions could hold null.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PracticeRecord {
    pub record_id: String,
    pub mode: WritingMode,
    pub question: Question,
    pub user_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<EvaluationResult>,
    pub timestamp: DateTime<Utc>,
}

impl PracticeRecord {
    pub fn new(
        record_id: String,
        question: Question,
        user_answer: String,
        evaluation: EvaluationResult,
    ) -> Self {
        PracticeRecord {
            record_id,
            mode: question.mode(),
            question,
            user_answer,
            evaluation: Some(evaluation),
            timestamp: Utc::now(),
        }
    }

    pub fn fresh_id() -> String {
        Uuid::new_v4().to_string()
    }
}
