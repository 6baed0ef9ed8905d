use async_trait::async_trait;
use mongodb::{
    bson::doc,
    options::{IndexOptions, ReplaceOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::DailyQuestion};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DailyQuestionRepository: Send + Sync {
    /// Read-only cache lookup; never triggers generation.
    async fn get_by_date(&self, date_str: &str) -> AppResult<Option<DailyQuestion>>;
    /// Overwrite the row for the entry's date, inserting it if absent.
    /// Never produces two rows for one date.
    async fn upsert(&self, entry: DailyQuestion) -> AppResult<DailyQuestion>;
}

pub struct MongoDailyQuestionRepository {
    collection: Collection<DailyQuestion>,
}

impl MongoDailyQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("daily_questions");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let date_index = IndexModel::builder()
            .keys(doc! { "date_str": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("date_str_unique".to_string())
                    .build(),
            )
            .build();
        self.collection.create_index(date_index).await?;

        log::info!("Created indexes for daily_questions collection");
        Ok(())
    }
}

#[async_trait]
impl DailyQuestionRepository for MongoDailyQuestionRepository {
    async fn get_by_date(&self, date_str: &str) -> AppResult<Option<DailyQuestion>> {
        let entry = self
            .collection
            .find_one(doc! { "date_str": date_str })
            .await?;
        Ok(entry)
    }

    async fn upsert(&self, entry: DailyQuestion) -> AppResult<DailyQuestion> {
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(doc! { "date_str": &entry.date_str }, &entry)
            .with_options(options)
            .await?;

        Ok(entry)
    }
}
