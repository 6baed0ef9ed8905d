use serde::{Deserialize, Serialize};

use crate::models::domain::WritingMode;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentenceCorrectionQuestion {
    pub question: String,
    pub error_type: String,
    #[serde(default)]
    pub hint: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranslationQuestion {
    pub chinese_sentence: String,
    #[serde(default)]
    pub key_words: Vec<String>,
    #[serde(default)]
    pub hint: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordUpgradingQuestion {
    pub basic_word: String,
    #[serde(default)]
    pub word_meaning: String,
    #[serde(default)]
    pub hint: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogicLinkingQuestion {
    pub sentence1: String,
    pub sentence2: String,
    #[serde(default)]
    pub hint: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentenceCombiningQuestion {
    pub sentences: Vec<String>,
    #[serde(default)]
    pub target_structure: String,
    #[serde(default)]
    pub hint: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParaphrasingQuestion {
    pub original_sentence: String,
    #[serde(default)]
    pub hint: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrainstormingQuestion {
    pub topic: String,
    #[serde(default)]
    pub topic_background: String,
    #[serde(default)]
    pub hint: String,
}

/// One generated exercise. Untagged so questions serialize to the bare
/// per-mode payloads earlier data files hold; each variant has a required
/// field no other variant carries, which keeps deserialization unambiguous.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Question {
    SentenceCorrection(SentenceCorrectionQuestion),
    Translation(TranslationQuestion),
    WordUpgrading(WordUpgradingQuestion),
    LogicLinking(LogicLinkingQuestion),
    SentenceCombining(SentenceCombiningQuestion),
    Paraphrasing(ParaphrasingQuestion),
    Brainstorming(BrainstormingQuestion),
}

impl Question {
    pub fn mode(&self) -> WritingMode {
        match self {
            Question::SentenceCorrection(_) => WritingMode::SentenceCorrection,
            Question::Translation(_) => WritingMode::Translation,
            Question::WordUpgrading(_) => WritingMode::WordUpgrading,
            Question::LogicLinking(_) => WritingMode::LogicLinking,
            Question::SentenceCombining(_) => WritingMode::SentenceCombining,
            Question::Paraphrasing(_) => WritingMode::Paraphrasing,
            Question::Brainstorming(_) => WritingMode::Brainstorming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_round_trip_resolves_the_right_variant() {
        let question = Question::Translation(TranslationQuestion {
            chinese_sentence: "我每天读书。".to_string(),
            key_words: vec!["read".to_string()],
            hint: "注意冠词".to_string(),
        });

        let json = serde_json::to_string(&question).unwrap();
        assert!(json.contains("chinese_sentence"));

        let parsed: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, question);
        assert_eq!(parsed.mode(), WritingMode::Translation);
    }

    #[test]
    fn correction_payload_does_not_match_paraphrasing() {
        let json = r#"{"question": "He go to school.", "error_type": "主谓一致", "hint": "看动词"}"#;
        let parsed: Question = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.mode(), WritingMode::SentenceCorrection);
    }
}
