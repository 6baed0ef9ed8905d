use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::Question;

/// The cached question for one calendar date. At most one row per
/// `date_str`; a refresh overwrites the row rather than appending.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyQuestion {
    pub date_str: String,
    pub question: Question,
    pub timestamp: DateTime<Utc>,
}

impl DailyQuestion {
    pub fn new(date_str: String, question: Question) -> Self {
        DailyQuestion {
            date_str,
            question,
            timestamp: Utc::now(),
        }
    }

    /// Today's cache key, an ISO date string in local time.
    pub fn today_key() -> String {
        chrono::Local::now().date_naive().to_string()
    }
}
