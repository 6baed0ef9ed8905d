use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{FeedbackDetail, FeedbackType, WeaknessPoint, WritingMode};

/// Keywords marking a grammar or lexical error.
const GRAMMAR_KEYWORDS: [&str; 16] = [
    "语法", "拼写", "时态", "主谓", "冠词", "介词", "单复数", "词形", "用词", "错误",
    "grammar", "spelling", "tense", "agreement", "article", "preposition",
];

/// Keywords marking stylistic or fluency feedback on otherwise correct text.
const FLUENCY_KEYWORDS: [&str; 12] = [
    "表达", "流畅", "地道", "高级", "句式", "润色", "升级", "优化",
    "style", "fluency", "natural", "upgrade",
];

/// Phrases that introduce the corrected form inside a legacy comment,
/// checked by earliest occurrence in the text.
const SUGGESTION_MARKERS: [&str; 10] = [
    "应为", "应该是", "应改为", "可以改为", "可改为", "建议改为", "建议使用", "改为",
    "should be", "consider using",
];

static QUOTED_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""([^"]+)"|“([^”]+)”|‘([^’]+)’|「([^」]+)」|'([^']+)'"#)
        .expect("quoted span pattern is valid")
});

/// Normalize raw critique items into unsaved weakness points.
///
/// Fully structured items pass through directly. Items carrying only a
/// legacy free-form `comment` are reclassified here — nothing reaches
/// storage without one of the three canonical tags.
pub fn extract(
    mode: WritingMode,
    record_id: Option<&str>,
    details: &[FeedbackDetail],
) -> Vec<WeaknessPoint> {
    details
        .iter()
        .filter_map(|detail| normalize(mode, record_id, detail))
        .collect()
}

fn normalize(
    mode: WritingMode,
    record_id: Option<&str>,
    detail: &FeedbackDetail,
) -> Option<WeaknessPoint> {
    let record_id = record_id.map(|id| id.to_string());
    let tag = detail.kind.as_deref().unwrap_or("").trim();
    let issue = detail.issue.as_deref().unwrap_or("").trim();
    let correction = detail.correction.as_deref().unwrap_or("").trim();
    let comment = detail.comment.as_deref().unwrap_or("").trim();

    if !tag.is_empty() && !issue.is_empty() && !correction.is_empty() {
        // Tags outside the closed taxonomy (older output used Chinese
        // category names) fall back to the same keyword heuristic.
        let kind = FeedbackType::from_tag(tag)
            .unwrap_or_else(|| classify_comment(&format!("{} {}", tag, issue)));
        return Some(WeaknessPoint::new(
            record_id,
            kind,
            issue.to_string(),
            correction.to_string(),
            mode,
        ));
    }

    if !comment.is_empty() {
        return Some(WeaknessPoint::new(
            record_id,
            classify_comment(comment),
            comment.to_string(),
            isolate_correction(comment),
            mode,
        ));
    }

    if !issue.is_empty() {
        let kind = FeedbackType::from_tag(tag).unwrap_or_else(|| classify_comment(issue));
        return Some(WeaknessPoint::new(
            record_id,
            kind,
            issue.to_string(),
            correction.to_string(),
            mode,
        ));
    }

    None
}

/// Best-effort classification of a legacy comment into the closed taxonomy.
pub fn classify_comment(comment: &str) -> FeedbackType {
    let lowered = comment.to_lowercase();
    if GRAMMAR_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        FeedbackType::Caution
    } else if FLUENCY_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        FeedbackType::Suggestion
    } else {
        FeedbackType::Other
    }
}

/// Pull a correction out of a legacy comment. The first suggestion-marker
/// occurrence wins and the remainder of the string (marker included) is the
/// correction; failing that, quoted spans are used — the second span is
/// taken as the corrected form, the first if only one exists. An empty
/// result is accepted, not an error.
pub fn isolate_correction(comment: &str) -> String {
    let earliest = SUGGESTION_MARKERS
        .iter()
        .filter_map(|marker| comment.find(marker))
        .min();
    if let Some(pos) = earliest {
        return comment[pos..].trim().to_string();
    }

    let spans: Vec<&str> = QUOTED_SPAN
        .captures_iter(comment)
        .filter_map(|caps| {
            (1..caps.len())
                .filter_map(|i| caps.get(i))
                .next()
                .map(|m| m.as_str())
        })
        .collect();

    match spans.as_slice() {
        [] => String::new(),
        [only] => format!("建议改为「{}」", only),
        [_, second, ..] => format!("建议改为「{}」", second),
    }
}
