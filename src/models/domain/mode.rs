use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// The seven daily exercise categories. Serialized with the display names
/// used by earlier data files so stored records keep deserializing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WritingMode {
    #[serde(rename = "Sentence Correction")]
    SentenceCorrection,
    #[serde(rename = "Translation")]
    Translation,
    #[serde(rename = "Word Upgrading")]
    WordUpgrading,
    #[serde(rename = "Logic Linking")]
    LogicLinking,
    #[serde(rename = "Sentence Combining")]
    SentenceCombining,
    #[serde(rename = "Paraphrasing")]
    Paraphrasing,
    #[serde(rename = "Brainstorming")]
    Brainstorming,
}

pub const ALL_MODES: [WritingMode; 7] = [
    WritingMode::SentenceCorrection,
    WritingMode::Translation,
    WritingMode::WordUpgrading,
    WritingMode::LogicLinking,
    WritingMode::SentenceCombining,
    WritingMode::Paraphrasing,
    WritingMode::Brainstorming,
];

impl WritingMode {
    /// Weekday index 0 (Monday) through 6 (Sunday).
    pub fn from_weekday(weekday: u32) -> Self {
        ALL_MODES[(weekday % 7) as usize]
    }

    /// Deterministic lookup from the current local date's weekday.
    pub fn today() -> Self {
        Self::from_weekday(Local::now().date_naive().weekday().num_days_from_monday())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WritingMode::SentenceCorrection => "Sentence Correction",
            WritingMode::Translation => "Translation",
            WritingMode::WordUpgrading => "Word Upgrading",
            WritingMode::LogicLinking => "Logic Linking",
            WritingMode::SentenceCombining => "Sentence Combining",
            WritingMode::Paraphrasing => "Paraphrasing",
            WritingMode::Brainstorming => "Brainstorming",
        }
    }
}

impl std::fmt::Display for WritingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
