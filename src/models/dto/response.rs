use serde::Serialize;

use crate::{
    models::domain::{EvaluationResult, PracticeRecord, Question, WeaknessPoint, WritingMode},
    services::PracticeStats,
};

#[derive(Debug, Clone, Serialize)]
pub struct TodayQuestionResponse {
    pub date_str: String,
    pub mode: WritingMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswerResponse {
    pub record_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<EvaluationResult>,
}

impl From<PracticeRecord> for SubmitAnswerResponse {
    fn from(record: PracticeRecord) -> Self {
        SubmitAnswerResponse {
            record_id: record.record_id,
            evaluation: record.evaluation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PracticeHistoryResponse {
    pub items: Vec<PracticeRecord>,
    pub total: i64,
    pub offset: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PracticeStatsResponse {
    pub total_practices: u64,
    pub correct_count: u64,
    pub accuracy: f64,
    pub weakness_point_count: u64,
}

impl From<PracticeStats> for PracticeStatsResponse {
    fn from(stats: PracticeStats) -> Self {
        let accuracy = if stats.total_practices == 0 {
            0.0
        } else {
            stats.correct_count as f64 / stats.total_practices as f64
        };
        PracticeStatsResponse {
            total_practices: stats.total_practices,
            correct_count: stats.correct_count,
            accuracy,
            weakness_point_count: stats.weakness_count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WeaknessListResponse {
    pub items: Vec<WeaknessPoint>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssistantReplyResponse {
    pub reply: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}
