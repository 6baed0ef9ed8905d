use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::AskAssistantRequest, response::AssistantReplyResponse},
};

#[post("/api/assistant/ask")]
async fn ask_assistant(
    state: web::Data<AppState>,
    request: web::Json<AskAssistantRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let reply = state.assistant_service.ask(&request.question).await?;
    Ok(HttpResponse::Ok().json(AssistantReplyResponse { reply }))
}
