use std::sync::Arc;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::domain::{
        EvaluationResult, FeedbackType, PracticeRecord, Question, WeaknessPoint, WritingMode,
    },
    repositories::{PracticeRecordRepository, WeaknessPointRepository},
    services::{
        completion_client::{CompletionClient, CompletionRequest},
        prompt_composer, response_parser, weakness_extractor,
    },
};

/// Simple practice counters for the stats endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PracticeStats {
    pub total_practices: u64,
    pub correct_count: u64,
    pub weakness_count: u64,
}

/// Orchestrates the critique pipeline: prompt → completion → parse →
/// weakness extraction → persistence. Also the re-evaluation coordinator.
pub struct EvaluationService {
    completion_client: Arc<dyn CompletionClient>,
    weakness_points: Arc<dyn WeaknessPointRepository>,
    practice_records: Arc<dyn PracticeRecordRepository>,
}

impl EvaluationService {
    pub fn new(
        completion_client: Arc<dyn CompletionClient>,
        weakness_points: Arc<dyn WeaknessPointRepository>,
        practice_records: Arc<dyn PracticeRecordRepository>,
    ) -> Self {
        Self {
            completion_client,
            weakness_points,
            practice_records,
        }
    }

    /// Run one critique. On any completion or parse failure the error is
    /// returned with no record or weakness mutation. With
    /// `auto_save_weakness` the extracted points are persisted immediately,
    /// tied to `record_id` when one is given.
    pub async fn evaluate(
        &self,
        mode: WritingMode,
        question: &Question,
        user_answer: &str,
        record_id: Option<&str>,
        auto_save_weakness: bool,
    ) -> AppResult<EvaluationResult> {
        if user_answer.trim().is_empty() {
            return Err(AppError::ValidationError(
                "answer text must not be empty".to_string(),
            ));
        }

        let prompt = prompt_composer::build_evaluation_prompt(mode, question, user_answer)?;

        let raw = self
            .completion_client
            .complete(CompletionRequest {
                system: prompts::EVALUATION_SYSTEM_PROMPT.to_string(),
                user: prompt,
                temperature: prompts::EVALUATION_TEMPERATURE,
                max_tokens: prompts::EVALUATION_MAX_TOKENS,
            })
            .await
            .map_err(|e| AppError::EvaluationFailure(e.to_string()))?;

        let result = response_parser::parse_evaluation(&raw)
            .map_err(|e| AppError::EvaluationFailure(format!("malformed payload: {}", e)))?;

        if auto_save_weakness {
            let points = weakness_extractor::extract(mode, record_id, &result.details);
            self.weakness_points.create_many(points).await?;
        }

        Ok(result)
    }

    /// First submission of an answer: evaluate, persist the weakness batch
    /// tied to a freshly minted record id, then create the practice record
    /// under that id. Nothing is created when evaluation fails.
    pub async fn submit(
        &self,
        mode: WritingMode,
        question: Question,
        user_answer: String,
    ) -> AppResult<PracticeRecord> {
        let record_id = PracticeRecord::fresh_id();

        let result = self
            .evaluate(mode, &question, &user_answer, Some(&record_id), true)
            .await?;

        let record = PracticeRecord::new(record_id, question, user_answer, result);
        let record = self.practice_records.create(record).await?;

        log::info!("Created practice record {}", record.record_id);
        Ok(record)
    }

    /// Re-run the critique for an existing record and swap its evaluation
    /// and entire weakness set. Destructive steps run only after the new
    /// evaluation is confirmed: replace the weakness rows first, then update
    /// the record in place. On failure the previous evaluation and weakness
    /// set stay authoritative.
    pub async fn re_evaluate(&self, record_id: &str) -> AppResult<EvaluationResult> {
        let record = self
            .practice_records
            .find_by_id(record_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Practice record with id '{}' not found", record_id))
            })?;

        let result = self
            .evaluate(
                record.mode,
                &record.question,
                &record.user_answer,
                Some(record_id),
                false,
            )
            .await?;

        let points = weakness_extractor::extract(record.mode, Some(record_id), &result.details);
        self.weakness_points
            .replace_for_record(record_id, points)
            .await?;
        self.practice_records
            .update_evaluation(record_id, &result)
            .await?;

        log::info!("Replaced evaluation for practice record {}", record_id);
        Ok(result)
    }

    /// Recency-sorted practice history page plus the overall total.
    pub async fn history(
        &self,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<PracticeRecord>, i64)> {
        self.practice_records.list_recent(offset, limit).await
    }

    /// All weakness points, or only those carrying the given tag.
    pub async fn list_weakness_points(
        &self,
        kind: Option<FeedbackType>,
    ) -> AppResult<Vec<WeaknessPoint>> {
        match kind {
            Some(kind) => self.weakness_points.list_by_type(kind).await,
            None => self.weakness_points.list_all().await,
        }
    }

    pub async fn stats(&self) -> AppResult<PracticeStats> {
        let total_practices = self.practice_records.count().await?;
        let correct_count = self.practice_records.count_correct().await?;
        let weakness_count = self.weakness_points.count().await?;

        Ok(PracticeStats {
            total_practices,
            correct_count,
            weakness_count,
        })
    }
}
