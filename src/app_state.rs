use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoDailyQuestionRepository, MongoPracticeRecordRepository, MongoWeaknessPointRepository,
    },
    services::{AssistantService, EvaluationService, HttpCompletionClient, QuestionService},
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub evaluation_service: Arc<EvaluationService>,
    pub assistant_service: Arc<AssistantService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let daily_questions = Arc::new(MongoDailyQuestionRepository::new(&db));
        daily_questions.ensure_indexes().await?;

        let practice_records = Arc::new(MongoPracticeRecordRepository::new(&db));
        practice_records.ensure_indexes().await?;

        let weakness_points = Arc::new(MongoWeaknessPointRepository::new(&db));
        weakness_points.ensure_indexes().await?;

        let completion_client = Arc::new(HttpCompletionClient::new(&config));

        let question_service = Arc::new(QuestionService::new(
            completion_client.clone(),
            daily_questions,
            weakness_points.clone(),
        ));
        let evaluation_service = Arc::new(EvaluationService::new(
            completion_client.clone(),
            weakness_points,
            practice_records,
        ));
        let assistant_service = Arc::new(AssistantService::new(completion_client));

        Ok(Self {
            question_service,
            evaluation_service,
            assistant_service,
            db,
            config: Arc::new(config),
        })
    }
}
