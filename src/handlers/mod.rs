pub mod assistant_handler;
pub mod health_handler;
pub mod practice_handler;
pub mod question_handler;
pub mod weakness_handler;

pub use assistant_handler::ask_assistant;
pub use health_handler::health_check;
pub use practice_handler::{
    get_practice_stats, list_practice_records, re_evaluate_record, submit_answer,
};
pub use question_handler::{generate_today_question, get_today_question, refresh_today_question};
pub use weakness_handler::list_weakness_points;
