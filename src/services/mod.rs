pub mod assistant_service;
pub mod completion_client;
pub mod evaluation_service;
pub mod prompt_composer;
pub mod question_service;
pub mod response_parser;
pub mod weakness_extractor;

pub use assistant_service::AssistantService;
pub use completion_client::{CompletionClient, CompletionRequest, HttpCompletionClient};
pub use evaluation_service::{EvaluationService, PracticeStats};
pub use question_service::QuestionService;
