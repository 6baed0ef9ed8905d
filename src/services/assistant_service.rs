use std::sync::Arc;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    services::completion_client::{CompletionClient, CompletionRequest},
};

/// Free-form study Q&A. The reply is handed back verbatim; nothing is
/// parsed or persisted.
pub struct AssistantService {
    completion_client: Arc<dyn CompletionClient>,
}

impl AssistantService {
    pub fn new(completion_client: Arc<dyn CompletionClient>) -> Self {
        Self { completion_client }
    }

    pub async fn ask(&self, question: &str) -> AppResult<String> {
        if question.trim().is_empty() {
            return Err(AppError::ValidationError(
                "question text must not be empty".to_string(),
            ));
        }

        let reply = self
            .completion_client
            .complete(CompletionRequest {
                system: prompts::ASSISTANT_SYSTEM_PROMPT.to_string(),
                user: question.to_string(),
                temperature: prompts::ASSISTANT_TEMPERATURE,
                max_tokens: prompts::ASSISTANT_MAX_TOKENS,
            })
            .await
            .map_err(|e| AppError::AssistantFailure(e.to_string()))?;

        Ok(reply)
    }
}
