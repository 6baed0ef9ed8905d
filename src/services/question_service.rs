use std::sync::Arc;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::domain::{DailyQuestion, WritingMode},
    repositories::{DailyQuestionRepository, WeaknessPointRepository},
    services::{
        completion_client::{CompletionClient, CompletionRequest},
        prompt_composer, response_parser,
    },
};

/// Drives question generation and the per-date question cache.
pub struct QuestionService {
    completion_client: Arc<dyn CompletionClient>,
    daily_questions: Arc<dyn DailyQuestionRepository>,
    weakness_points: Arc<dyn WeaknessPointRepository>,
}

impl QuestionService {
    pub fn new(
        completion_client: Arc<dyn CompletionClient>,
        daily_questions: Arc<dyn DailyQuestionRepository>,
        weakness_points: Arc<dyn WeaknessPointRepository>,
    ) -> Self {
        Self {
            completion_client,
            daily_questions,
            weakness_points,
        }
    }

    /// Cache read only. Never generates.
    pub async fn get_cached(&self, date_str: &str) -> AppResult<Option<DailyQuestion>> {
        self.daily_questions.get_by_date(date_str).await
    }

    /// Return the cached question for the date, generating one only when
    /// the cache slot is empty. Repeated calls on the same date hand back
    /// the identical question.
    pub async fn get_or_generate(
        &self,
        mode: WritingMode,
        date_str: &str,
    ) -> AppResult<DailyQuestion> {
        if let Some(cached) = self.daily_questions.get_by_date(date_str).await? {
            return Ok(cached);
        }
        self.generate(mode, date_str).await
    }

    /// Generate a fresh question and overwrite the date's cache slot.
    /// Nothing is written when generation or parsing fails.
    pub async fn generate(&self, mode: WritingMode, date_str: &str) -> AppResult<DailyQuestion> {
        let recent_points = self.weakness_points.list_recent(5).await?;
        let summary = prompt_composer::weakness_summary(&recent_points);
        let prompt = prompt_composer::build_generation_prompt(mode, &summary);

        let raw = self
            .completion_client
            .complete(CompletionRequest {
                system: prompts::GENERATION_SYSTEM_PROMPT.to_string(),
                user: prompt,
                temperature: prompts::GENERATION_TEMPERATURE,
                max_tokens: prompts::GENERATION_MAX_TOKENS,
            })
            .await
            .map_err(|e| AppError::GenerationFailure(e.to_string()))?;

        let question = response_parser::parse_question(mode, &raw)
            .map_err(|e| AppError::GenerationFailure(format!("malformed payload: {}", e)))?;

        let entry = DailyQuestion::new(date_str.to_string(), question);
        let entry = self.daily_questions.upsert(entry).await?;

        log::info!("Generated {} question for {}", mode, date_str);
        Ok(entry)
    }
}
