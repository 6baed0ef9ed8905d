use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson},
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{EvaluationResult, PracticeRecord},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PracticeRecordRepository: Send + Sync {
    async fn create(&self, record: PracticeRecord) -> AppResult<PracticeRecord>;
    async fn find_by_id(&self, record_id: &str) -> AppResult<Option<PracticeRecord>>;
    async fn list_recent(&self, offset: i64, limit: i64) -> AppResult<(Vec<PracticeRecord>, i64)>;
    /// Replace the stored evaluation in place. The record keeps its id,
    /// question, answer and timestamp — a re-evaluation never duplicates it.
    async fn update_evaluation(
        &self,
        record_id: &str,
        evaluation: &EvaluationResult,
    ) -> AppResult<()>;
    async fn count(&self) -> AppResult<u64>;
    async fn count_correct(&self) -> AppResult<u64>;
}

pub struct MongoPracticeRecordRepository {
    collection: Collection<PracticeRecord>,
}

impl MongoPracticeRecordRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("practice_history");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let id_index = IndexModel::builder()
            .keys(doc! { "record_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("record_id_unique".to_string())
                    .build(),
            )
            .build();
        self.collection.create_index(id_index).await?;

        log::info!("Created indexes for practice_history collection");
        Ok(())
    }
}

#[async_trait]
impl PracticeRecordRepository for MongoPracticeRecordRepository {
    async fn create(&self, record: PracticeRecord) -> AppResult<PracticeRecord> {
        self.collection.insert_one(&record).await?;
        Ok(record)
    }

    async fn find_by_id(&self, record_id: &str) -> AppResult<Option<PracticeRecord>> {
        let record = self
            .collection
            .find_one(doc! { "record_id": record_id })
            .await?;
        Ok(record)
    }

    async fn list_recent(&self, offset: i64, limit: i64) -> AppResult<(Vec<PracticeRecord>, i64)> {
        let total = self.collection.count_documents(doc! {}).await? as i64;

        let find_options = FindOptions::builder()
            .sort(doc! { "timestamp": -1 })
            .skip(Some(offset as u64))
            .limit(Some(limit))
            .build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(find_options)
            .await?;
        let items: Vec<PracticeRecord> = cursor.try_collect().await?;

        Ok((items, total))
    }

    async fn update_evaluation(
        &self,
        record_id: &str,
        evaluation: &EvaluationResult,
    ) -> AppResult<()> {
        let evaluation_bson = to_bson(evaluation)?;
        let result = self
            .collection
            .update_one(
                doc! { "record_id": record_id },
                doc! { "$set": { "evaluation": evaluation_bson } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Practice record with id '{}' not found",
                record_id
            )));
        }

        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        let total = self.collection.count_documents(doc! {}).await?;
        Ok(total)
    }

    async fn count_correct(&self) -> AppResult<u64> {
        let total = self
            .collection
            .count_documents(doc! { "evaluation.is_correct": true })
            .await?;
        Ok(total)
    }
}
