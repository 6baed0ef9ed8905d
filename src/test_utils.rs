#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{
        question::{SentenceCorrectionQuestion, TranslationQuestion},
        EvaluationResult, FeedbackDetail, FeedbackType, Question, Reference,
    };

    /// A standard translation exercise.
    pub fn translation_question() -> Question {
        Question::Translation(TranslationQuestion {
            chinese_sentence: "我每天读书。".to_string(),
            key_words: vec!["read".to_string(), "every day".to_string()],
            hint: "注意名词单复数".to_string(),
        })
    }

    /// A standard sentence correction exercise.
    pub fn correction_question() -> Question {
        Question::SentenceCorrection(SentenceCorrectionQuestion {
            question: "He go to school every day.".to_string(),
            error_type: "主谓一致".to_string(),
            hint: "看动词".to_string(),
        })
    }

    /// A critique for the translation exercise with one structured item.
    pub fn translation_evaluation() -> EvaluationResult {
        EvaluationResult {
            summary: "整体通顺，注意名词单复数。".to_string(),
            is_correct: false,
            reference: Reference::ReferenceTranslation("I read books every day.".to_string()),
            high_score_expression: Some("Reading is part of my daily routine.".to_string()),
            details: vec![FeedbackDetail::structured(
                FeedbackType::Caution,
                "book",
                "a book / books",
            )],
        }
    }

    /// A critique with no items, marked correct.
    pub fn correct_evaluation() -> EvaluationResult {
        EvaluationResult {
            summary: "完全正确！".to_string(),
            is_correct: true,
            reference: Reference::CorrectAnswer("He goes to school every day.".to_string()),
            high_score_expression: None,
            details: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::WritingMode;

    #[test]
    fn test_fixtures_translation_question() {
        let question = translation_question();
        assert_eq!(question.mode(), WritingMode::Translation);
    }

    #[test]
    fn test_fixtures_translation_evaluation() {
        let evaluation = translation_evaluation();
        assert!(!evaluation.is_correct);
        assert_eq!(evaluation.details.len(), 1);
        assert_eq!(
            evaluation.reference.field_name(),
            "reference_translation"
        );
    }

    #[test]
    fn test_fixtures_correct_evaluation() {
        let evaluation = correct_evaluation();
        assert!(evaluation.is_correct);
        assert!(evaluation.details.is_empty());
    }
}
