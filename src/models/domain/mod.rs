pub mod daily_question;
pub mod evaluation;
pub mod mode;
pub mod practice_record;
pub mod question;
pub mod weakness_point;

pub use daily_question::DailyQuestion;
pub use evaluation::{EvaluationResult, FeedbackDetail, FeedbackType, Reference};
pub use mode::{WritingMode, ALL_MODES};
pub use practice_record::PracticeRecord;
pub use question::Question;
pub use weakness_point::WeaknessPoint;
