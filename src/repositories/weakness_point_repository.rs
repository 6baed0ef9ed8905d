use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{FeedbackType, WeaknessPoint},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeaknessPointRepository: Send + Sync {
    async fn create_many(&self, points: Vec<WeaknessPoint>) -> AppResult<Vec<WeaknessPoint>>;
    async fn list_recent(&self, limit: i64) -> AppResult<Vec<WeaknessPoint>>;
    async fn list_all(&self) -> AppResult<Vec<WeaknessPoint>>;
    async fn list_by_type(&self, kind: FeedbackType) -> AppResult<Vec<WeaknessPoint>>;
    async fn list_by_record_id(&self, record_id: &str) -> AppResult<Vec<WeaknessPoint>>;
    /// Swap the whole weakness set tied to a record: delete every existing
    /// row for `record_id`, then insert `points`. Sequenced inside one store
    /// call so no caller ever interleaves between the two steps.
    async fn replace_for_record(
        &self,
        record_id: &str,
        points: Vec<WeaknessPoint>,
    ) -> AppResult<Vec<WeaknessPoint>>;
    async fn count(&self) -> AppResult<u64>;
}

pub struct MongoWeaknessPointRepository {
    collection: Collection<WeaknessPoint>,
}

impl MongoWeaknessPointRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("weakness_points");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let record_id_index = IndexModel::builder()
            .keys(doc! { "record_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("record_id_lookup".to_string())
                    .build(),
            )
            .build();
        self.collection.create_index(record_id_index).await?;

        let recency_index = IndexModel::builder()
            .keys(doc! { "timestamp": -1 })
            .options(
                IndexOptions::builder()
                    .name("timestamp_recency".to_string())
                    .build(),
            )
            .build();
        self.collection.create_index(recency_index).await?;

        log::info!("Created indexes for weakness_points collection");
        Ok(())
    }
}

#[async_trait]
impl WeaknessPointRepository for MongoWeaknessPointRepository {
    async fn create_many(&self, points: Vec<WeaknessPoint>) -> AppResult<Vec<WeaknessPoint>> {
        if !points.is_empty() {
            self.collection.insert_many(&points).await?;
        }
        Ok(points)
    }

    async fn list_recent(&self, limit: i64) -> AppResult<Vec<WeaknessPoint>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "timestamp": -1 })
            .limit(Some(limit))
            .build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(find_options)
            .await?;
        let points: Vec<WeaknessPoint> = cursor.try_collect().await?;
        Ok(points)
    }

    async fn list_all(&self) -> AppResult<Vec<WeaknessPoint>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "timestamp": -1 })
            .build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(find_options)
            .await?;
        let points: Vec<WeaknessPoint> = cursor.try_collect().await?;
        Ok(points)
    }

    async fn list_by_type(&self, kind: FeedbackType) -> AppResult<Vec<WeaknessPoint>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "timestamp": -1 })
            .build();

        let cursor = self
            .collection
            .find(doc! { "type": kind.as_str() })
            .with_options(find_options)
            .await?;
        let points: Vec<WeaknessPoint> = cursor.try_collect().await?;
        Ok(points)
    }

    async fn list_by_record_id(&self, record_id: &str) -> AppResult<Vec<WeaknessPoint>> {
        let cursor = self
            .collection
            .find(doc! { "record_id": record_id })
            .await?;
        let points: Vec<WeaknessPoint> = cursor.try_collect().await?;
        Ok(points)
    }

    async fn replace_for_record(
        &self,
        record_id: &str,
        points: Vec<WeaknessPoint>,
    ) -> AppResult<Vec<WeaknessPoint>> {
        // New-wins ordering: the stale set is removed before the confirmed
        // replacement lands. A crash between the two steps leaves the record
        // with an empty set rather than a mixed one.
        self.collection
            .delete_many(doc! { "record_id": record_id })
            .await?;
        if !points.is_empty() {
            self.collection.insert_many(&points).await?;
        }
        Ok(points)
    }

    async fn count(&self) -> AppResult<u64> {
        let total = self.collection.count_documents(doc! {}).await?;
        Ok(total)
    }
}
