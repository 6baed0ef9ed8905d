use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use microwrite_server::{
    errors::{AppError, AppResult},
    models::domain::{
        DailyQuestion, EvaluationResult, FeedbackType, PracticeRecord, Question, WeaknessPoint,
        WritingMode,
    },
    repositories::{DailyQuestionRepository, PracticeRecordRepository, WeaknessPointRepository},
    services::{
        completion_client::{CompletionClient, CompletionError, CompletionRequest},
        EvaluationService, QuestionService,
    },
};

/// Completion client that replays a fixed script of responses and records
/// every request it receives.
struct ScriptedCompletionClient {
    script: RwLock<VecDeque<Result<String, CompletionError>>>,
    requests: RwLock<Vec<CompletionRequest>>,
}

impl ScriptedCompletionClient {
    fn new(script: Vec<Result<String, CompletionError>>) -> Self {
        Self {
            script: RwLock::new(script.into()),
            requests: RwLock::new(Vec::new()),
        }
    }

    async fn call_count(&self) -> usize {
        self.requests.read().await.len()
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        self.requests.write().await.push(request);
        self.script
            .write()
            .await
            .pop_front()
            .unwrap_or(Err(CompletionError::EmptyChoices))
    }
}

struct InMemoryDailyQuestionRepository {
    entries: RwLock<HashMap<String, DailyQuestion>>,
}

impl InMemoryDailyQuestionRepository {
    fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl DailyQuestionRepository for InMemoryDailyQuestionRepository {
    async fn get_by_date(&self, date_str: &str) -> AppResult<Option<DailyQuestion>> {
        Ok(self.entries.read().await.get(date_str).cloned())
    }

    async fn upsert(&self, entry: DailyQuestion) -> AppResult<DailyQuestion> {
        self.entries
            .write()
            .await
            .insert(entry.date_str.clone(), entry.clone());
        Ok(entry)
    }
}

struct InMemoryPracticeRecordRepository {
    records: RwLock<HashMap<String, PracticeRecord>>,
}

impl InMemoryPracticeRecordRepository {
    fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl PracticeRecordRepository for InMemoryPracticeRecordRepository {
    async fn create(&self, record: PracticeRecord) -> AppResult<PracticeRecord> {
        self.records
            .write()
            .await
            .insert(record.record_id.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, record_id: &str) -> AppResult<Option<PracticeRecord>> {
        Ok(self.records.read().await.get(record_id).cloned())
    }

    async fn list_recent(&self, offset: i64, limit: i64) -> AppResult<(Vec<PracticeRecord>, i64)> {
        let records = self.records.read().await;
        let mut items: Vec<_> = records.values().cloned().collect();
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let total = items.len() as i64;
        let start = (offset.max(0) as usize).min(items.len());
        let end = (start + limit.max(0) as usize).min(items.len());
        Ok((items[start..end].to_vec(), total))
    }

    async fn update_evaluation(
        &self,
        record_id: &str,
        evaluation: &EvaluationResult,
    ) -> AppResult<()> {
        let mut records = self.records.write().await;
        match records.get_mut(record_id) {
            Some(record) => {
                record.evaluation = Some(evaluation.clone());
                Ok(())
            }
            None => Err(AppError::NotFound(format!(
                "Practice record with id '{}' not found",
                record_id
            ))),
        }
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.records.read().await.len() as u64)
    }

    async fn count_correct(&self) -> AppResult<u64> {
        let records = self.records.read().await;
        let correct = records
            .values()
            .filter(|r| r.evaluation.as_ref().is_some_and(|e| e.is_correct))
            .count();
        Ok(correct as u64)
    }
}

struct InMemoryWeaknessPointRepository {
    points: RwLock<Vec<WeaknessPoint>>,
}

impl InMemoryWeaknessPointRepository {
    fn new() -> Self {
        Self {
            points: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl WeaknessPointRepository for InMemoryWeaknessPointRepository {
    async fn create_many(&self, points: Vec<WeaknessPoint>) -> AppResult<Vec<WeaknessPoint>> {
        self.points.write().await.extend(points.iter().cloned());
        Ok(points)
    }

    async fn list_recent(&self, limit: i64) -> AppResult<Vec<WeaknessPoint>> {
        let store = self.points.read().await;
        let mut items = store.clone();
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        items.truncate(limit.max(0) as usize);
        Ok(items)
    }

    async fn list_all(&self) -> AppResult<Vec<WeaknessPoint>> {
        Ok(self.points.read().await.clone())
    }

    async fn list_by_type(&self, kind: FeedbackType) -> AppResult<Vec<WeaknessPoint>> {
        let store = self.points.read().await;
        Ok(store.iter().filter(|p| p.kind == kind).cloned().collect())
    }

    async fn list_by_record_id(&self, record_id: &str) -> AppResult<Vec<WeaknessPoint>> {
        let store = self.points.read().await;
        Ok(store
            .iter()
            .filter(|p| p.record_id.as_deref() == Some(record_id))
            .cloned()
            .collect())
    }

    async fn replace_for_record(
        &self,
        record_id: &str,
        points: Vec<WeaknessPoint>,
    ) -> AppResult<Vec<WeaknessPoint>> {
        let mut store = self.points.write().await;
        store.retain(|p| p.record_id.as_deref() != Some(record_id));
        store.extend(points.iter().cloned());
        Ok(points)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.points.read().await.len() as u64)
    }
}

struct Harness {
    client: Arc<ScriptedCompletionClient>,
    daily_questions: Arc<InMemoryDailyQuestionRepository>,
    practice_records: Arc<InMemoryPracticeRecordRepository>,
    weakness_points: Arc<InMemoryWeaknessPointRepository>,
    question_service: QuestionService,
    evaluation_service: EvaluationService,
}

fn harness(script: Vec<Result<String, CompletionError>>) -> Harness {
    let client = Arc::new(ScriptedCompletionClient::new(script));
    let daily_questions = Arc::new(InMemoryDailyQuestionRepository::new());
    let practice_records = Arc::new(InMemoryPracticeRecordRepository::new());
    let weakness_points = Arc::new(InMemoryWeaknessPointRepository::new());

    let question_service = QuestionService::new(
        client.clone(),
        daily_questions.clone(),
        weakness_points.clone(),
    );
    let evaluation_service = EvaluationService::new(
        client.clone(),
        weakness_points.clone(),
        practice_records.clone(),
    );

    Harness {
        client,
        daily_questions,
        practice_records,
        weakness_points,
        question_service,
        evaluation_service,
    }
}

const TRANSLATION_QUESTION_PAYLOAD: &str = r#"```json
{"chinese_sentence": "我每天读书。", "key_words": ["read", "every day"], "hint": "注意名词单复数"}
```"#;

const TRANSLATION_EVALUATION_PAYLOAD: &str = r#"```json
{
    "summary": "整体通顺，注意名词单复数。",
    "is_correct": false,
    "reference_translation": "I read books every day.",
    "high_score_expression": "Reading is part of my daily routine.",
    "details": [
        {"type": "Caution", "issue": "book", "correction": "a book / books"},
        {"type": "Suggestion", "issue": "every day", "correction": "daily"}
    ]
}
```"#;

const SECOND_EVALUATION_PAYLOAD: &str = r#"```json
{
    "summary": "复评：只剩一个时态问题。",
    "is_correct": false,
    "reference_translation": "I read books every day.",
    "details": [
        {"type": "Caution", "issue": "readed", "correction": "read"}
    ]
}
```"#;

#[tokio::test]
async fn generating_twice_on_one_date_reuses_the_cached_question() {
    let h = harness(vec![Ok(TRANSLATION_QUESTION_PAYLOAD.to_string())]);

    let first = h
        .question_service
        .get_or_generate(WritingMode::Translation, "2024-05-01")
        .await
        .unwrap();
    let second = h
        .question_service
        .get_or_generate(WritingMode::Translation, "2024-05-01")
        .await
        .unwrap();

    assert_eq!(first.question, second.question);
    assert_eq!(h.client.call_count().await, 1);

    let stored = h
        .daily_questions
        .get_by_date("2024-05-01")
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(stored.question, Question::Translation(_)));
}

#[tokio::test]
async fn refresh_overwrites_the_cached_question_without_adding_rows() {
    let h = harness(vec![
        Ok(TRANSLATION_QUESTION_PAYLOAD.to_string()),
        Ok(r#"{"chinese_sentence": "他昨天迟到了。", "key_words": ["late"], "hint": ""}"#
            .to_string()),
    ]);

    h.question_service
        .generate(WritingMode::Translation, "2024-05-01")
        .await
        .unwrap();
    let refreshed = h
        .question_service
        .generate(WritingMode::Translation, "2024-05-01")
        .await
        .unwrap();

    let stored = h
        .daily_questions
        .get_by_date("2024-05-01")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.question, refreshed.question);
    assert_eq!(h.client.call_count().await, 2);
}

#[tokio::test]
async fn submitting_an_answer_records_the_critique_and_ties_weakness_points() {
    let h = harness(vec![
        Ok(TRANSLATION_QUESTION_PAYLOAD.to_string()),
        Ok(TRANSLATION_EVALUATION_PAYLOAD.to_string()),
    ]);

    let entry = h
        .question_service
        .get_or_generate(WritingMode::Translation, "2024-05-01")
        .await
        .unwrap();

    let record = h
        .evaluation_service
        .submit(
            WritingMode::Translation,
            entry.question,
            "I read book every day.".to_string(),
        )
        .await
        .unwrap();

    let evaluation = record.evaluation.as_ref().unwrap();
    assert_eq!(evaluation.reference.field_name(), "reference_translation");
    assert!(!evaluation.is_correct);

    let stored = h
        .practice_records
        .find_by_id(&record.record_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.user_answer, "I read book every day.");

    let points = h
        .weakness_points
        .list_by_record_id(&record.record_id)
        .await
        .unwrap();
    assert_eq!(points.len(), 2);
    assert!(points
        .iter()
        .any(|p| p.kind == FeedbackType::Caution && p.issue == "book"));
    assert!(points
        .iter()
        .any(|p| p.kind == FeedbackType::Suggestion && p.issue == "every day"));
    assert!(points.iter().all(|p| p.mode == WritingMode::Translation));
}

#[tokio::test]
async fn failed_submission_leaves_no_record_and_no_weakness_points() {
    let h = harness(vec![Err(CompletionError::EmptyChoices)]);

    let question: Question = serde_json::from_str(
        r#"{"chinese_sentence": "我每天读书。", "key_words": [], "hint": ""}"#,
    )
    .unwrap();

    let result = h
        .evaluation_service
        .submit(
            WritingMode::Translation,
            question,
            "I read book every day.".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::EvaluationFailure(_))));
    assert_eq!(h.practice_records.count().await.unwrap(), 0);
    assert_eq!(h.weakness_points.count().await.unwrap(), 0);
}

#[tokio::test]
async fn re_evaluation_replaces_the_weakness_set_and_the_stored_critique() {
    let h = harness(vec![
        Ok(TRANSLATION_EVALUATION_PAYLOAD.to_string()),
        Ok(SECOND_EVALUATION_PAYLOAD.to_string()),
    ]);

    let question: Question = serde_json::from_str(
        r#"{"chinese_sentence": "我每天读书。", "key_words": [], "hint": ""}"#,
    )
    .unwrap();

    let record = h
        .evaluation_service
        .submit(
            WritingMode::Translation,
            question,
            "I readed book every day.".to_string(),
        )
        .await
        .unwrap();
    assert_eq!(
        h.weakness_points
            .list_by_record_id(&record.record_id)
            .await
            .unwrap()
            .len(),
        2
    );

    let replacement = h
        .evaluation_service
        .re_evaluate(&record.record_id)
        .await
        .unwrap();
    assert_eq!(replacement.summary, "复评：只剩一个时态问题。");

    let points = h
        .weakness_points
        .list_by_record_id(&record.record_id)
        .await
        .unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].issue, "readed");

    let stored = h
        .practice_records
        .find_by_id(&record.record_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        stored.evaluation.as_ref().unwrap().summary,
        "复评：只剩一个时态问题。"
    );
    assert_eq!(h.practice_records.count().await.unwrap(), 1);
}

#[tokio::test]
async fn failed_re_evaluation_keeps_the_previous_critique_and_points() {
    let h = harness(vec![
        Ok(TRANSLATION_EVALUATION_PAYLOAD.to_string()),
        Err(CompletionError::EmptyChoices),
    ]);

    let question: Question = serde_json::from_str(
        r#"{"chinese_sentence": "我每天读书。", "key_words": [], "hint": ""}"#,
    )
    .unwrap();

    let record = h
        .evaluation_service
        .submit(
            WritingMode::Translation,
            question,
            "I read book every day.".to_string(),
        )
        .await
        .unwrap();

    let result = h.evaluation_service.re_evaluate(&record.record_id).await;
    assert!(matches!(result, Err(AppError::EvaluationFailure(_))));

    let points = h
        .weakness_points
        .list_by_record_id(&record.record_id)
        .await
        .unwrap();
    assert_eq!(points.len(), 2);

    let stored = h
        .practice_records
        .find_by_id(&record.record_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        stored.evaluation.as_ref().unwrap().summary,
        "整体通顺，注意名词单复数。"
    );
}

#[tokio::test]
async fn stats_reflect_submissions_and_weakness_points() {
    let h = harness(vec![
        Ok(TRANSLATION_EVALUATION_PAYLOAD.to_string()),
        Ok(r#"{"summary": "完全正确！", "is_correct": true, "reference_translation": "He was late yesterday.", "details": []}"#.to_string()),
    ]);

    let question: Question = serde_json::from_str(
        r#"{"chinese_sentence": "我每天读书。", "key_words": [], "hint": ""}"#,
    )
    .unwrap();

    h.evaluation_service
        .submit(
            WritingMode::Translation,
            question.clone(),
            "I read book every day.".to_string(),
        )
        .await
        .unwrap();
    h.evaluation_service
        .submit(
            WritingMode::Translation,
            question,
            "He was late yesterday.".to_string(),
        )
        .await
        .unwrap();

    let stats = h.evaluation_service.stats().await.unwrap();
    assert_eq!(stats.total_practices, 2);
    assert_eq!(stats.correct_count, 1);
    assert_eq!(stats.weakness_count, 2);
}
