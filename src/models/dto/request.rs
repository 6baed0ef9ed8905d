use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAnswerRequest {
    #[validate(length(min = 1, max = 5000, message = "Answer must not be empty"))]
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AskAssistantRequest {
    #[validate(length(min = 1, max = 2000, message = "Question must not be empty"))]
    pub question: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeaknessQueryParams {
    /// Canonical feedback tag to filter by. Absent means all points.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 0))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).min(100)
    }
}
