use crate::constants::prompts;
use crate::errors::{AppError, AppResult};
use crate::models::domain::{FeedbackType, Question, WeaknessPoint, WritingMode};

/// One registry entry per mode: the prompt templates and the evaluation
/// schema's reference field name. Adding a mode is one entry here plus its
/// templates.
pub struct ModeDefinition {
    pub mode: WritingMode,
    pub reference_field: &'static str,
    generation_template: &'static str,
    evaluation_template: &'static str,
}

static MODE_REGISTRY: [ModeDefinition; 7] = [
    ModeDefinition {
        mode: WritingMode::SentenceCorrection,
        reference_field: "correct_answer",
        generation_template: prompts::GEN_SENTENCE_CORRECTION,
        evaluation_template: prompts::EVAL_SENTENCE_CORRECTION,
    },
    ModeDefinition {
        mode: WritingMode::Translation,
        reference_field: "reference_translation",
        generation_template: prompts::GEN_TRANSLATION,
        evaluation_template: prompts::EVAL_TRANSLATION,
    },
    ModeDefinition {
        mode: WritingMode::WordUpgrading,
        reference_field: "suggested_words",
        generation_template: prompts::GEN_WORD_UPGRADING,
        evaluation_template: prompts::EVAL_WORD_UPGRADING,
    },
    ModeDefinition {
        mode: WritingMode::LogicLinking,
        reference_field: "reference_sentence",
        generation_template: prompts::GEN_LOGIC_LINKING,
        evaluation_template: prompts::EVAL_LOGIC_LINKING,
    },
    ModeDefinition {
        mode: WritingMode::SentenceCombining,
        reference_field: "reference_answer",
        generation_template: prompts::GEN_SENTENCE_COMBINING,
        evaluation_template: prompts::EVAL_SENTENCE_COMBINING,
    },
    ModeDefinition {
        mode: WritingMode::Paraphrasing,
        reference_field: "reference_paraphrase",
        generation_template: prompts::GEN_PARAPHRASING,
        evaluation_template: prompts::EVAL_PARAPHRASING,
    },
    ModeDefinition {
        mode: WritingMode::Brainstorming,
        reference_field: "suggested_points",
        generation_template: prompts::GEN_BRAINSTORMING,
        evaluation_template: prompts::EVAL_BRAINSTORMING,
    },
];

pub fn definition(mode: WritingMode) -> &'static ModeDefinition {
    MODE_REGISTRY
        .iter()
        .find(|def| def.mode == mode)
        .expect("every mode has a registry entry")
}

/// Reduce recent weakness points to a feedback hint for question generation.
/// At most the 5 most recent points, type tags only, deduplicated — raw
/// issue text never goes back into generation, so the model is steered by
/// weakness category without seeing (and echoing) prior content.
pub fn weakness_summary(recent_points: &[WeaknessPoint]) -> String {
    let mut seen: Vec<FeedbackType> = Vec::new();
    for point in recent_points.iter().take(5) {
        if !seen.contains(&point.kind) {
            seen.push(point.kind);
        }
    }
    seen.iter()
        .map(|kind| format!("- {}", kind))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_generation_prompt(mode: WritingMode, weakness_summary: &str) -> String {
    definition(mode)
        .generation_template
        .replace("{weakness_context}", weakness_summary)
}

/// Build the evaluation instruction for one question/answer pair. Each mode
/// owns its field-name contract; a question from another mode is rejected
/// rather than rendered with the wrong schema.
pub fn build_evaluation_prompt(
    mode: WritingMode,
    question: &Question,
    user_answer: &str,
) -> AppResult<String> {
    if question.mode() != mode {
        return Err(AppError::ValidationError(format!(
            "question payload is for mode '{}', expected '{}'",
            question.mode(),
            mode
        )));
    }

    let template = definition(mode).evaluation_template;
    let filled = match question {
        Question::SentenceCorrection(q) => template
            .replace("{question}", &q.question)
            .replace("{error_type}", &q.error_type),
        Question::Translation(q) => template
            .replace("{chinese_sentence}", &q.chinese_sentence)
            .replace("{key_words}", &q.key_words.join(", ")),
        Question::WordUpgrading(q) => template
            .replace("{basic_word}", &q.basic_word)
            .replace("{word_meaning}", &q.word_meaning),
        Question::LogicLinking(q) => template
            .replace("{sentence1}", &q.sentence1)
            .replace("{sentence2}", &q.sentence2),
        Question::SentenceCombining(q) => template
            .replace("{sentences}", &q.sentences.join(", "))
            .replace("{target_structure}", &q.target_structure),
        Question::Paraphrasing(q) => template.replace("{original_sentence}", &q.original_sentence),
        Question::Brainstorming(q) => template.replace("{topic}", &q.topic),
    };

    Ok(filled
        .replace("{user_answer}", user_answer)
        .replace("{tagging_rule}", prompts::FEEDBACK_TAGGING_RULE))
}
