pub mod daily_question_repository;
pub mod practice_record_repository;
pub mod weakness_point_repository;

pub use daily_question_repository::{DailyQuestionRepository, MongoDailyQuestionRepository};
pub use practice_record_repository::{MongoPracticeRecordRepository, PracticeRecordRepository};
pub use weakness_point_repository::{MongoWeaknessPointRepository, WeaknessPointRepository};
