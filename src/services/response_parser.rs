use serde::de::DeserializeOwned;

use crate::models::domain::{EvaluationResult, Question, WritingMode};

/// Drop a markdown code-fence wrapper if the model added one. Handles a
/// leading ```json or ``` line and a trailing ```; anything else passes
/// through untouched for the JSON parser to judge.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut content = raw.trim();
    if let Some(rest) = content.strip_prefix("```json") {
        content = rest;
    } else if let Some(rest) = content.strip_prefix("```") {
        content = rest;
    }
    if let Some(rest) = content.strip_suffix("```") {
        content = rest;
    }
    content.trim()
}

/// Unwrap and structurally validate a completion payload. The completion
/// service holds no schema contract, so failure here is an expected outcome
/// the caller surfaces without persisting anything.
pub fn parse_payload<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(strip_code_fences(raw))
}

/// Parse a generation payload against the schema the given mode requested.
/// Dispatching by mode keeps one mode's field names from leaking into
/// another's parse path.
pub fn parse_question(mode: WritingMode, raw: &str) -> Result<Question, serde_json::Error> {
    let question = match mode {
        WritingMode::SentenceCorrection => Question::SentenceCorrection(parse_payload(raw)?),
        WritingMode::Translation => Question::Translation(parse_payload(raw)?),
        WritingMode::WordUpgrading => Question::WordUpgrading(parse_payload(raw)?),
        WritingMode::LogicLinking => Question::LogicLinking(parse_payload(raw)?),
        WritingMode::SentenceCombining => Question::SentenceCombining(parse_payload(raw)?),
        WritingMode::Paraphrasing => Question::Paraphrasing(parse_payload(raw)?),
        WritingMode::Brainstorming => Question::Brainstorming(parse_payload(raw)?),
    };
    Ok(question)
}

pub fn parse_evaluation(raw: &str) -> Result<EvaluationResult, serde_json::Error> {
    parse_payload(raw)
}
