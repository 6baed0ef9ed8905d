use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::DailyQuestion,
        dto::{
            request::{PaginationParams, SubmitAnswerRequest},
            response::{PracticeHistoryResponse, PracticeStatsResponse, SubmitAnswerResponse},
        },
    },
};

/// Submit an answer against today's cached question.
#[post("/api/practice/submissions")]
async fn submit_answer(
    state: web::Data<AppState>,
    request: web::Json<SubmitAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let date_str = DailyQuestion::today_key();
    let entry = state
        .question_service
        .get_cached(&date_str)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No question has been generated for {}", date_str))
        })?;

    let mode = entry.question.mode();
    let record = state
        .evaluation_service
        .submit(mode, entry.question, request.answer)
        .await?;

    Ok(HttpResponse::Created().json(SubmitAnswerResponse::from(record)))
}

#[post("/api/practice/records/{record_id}/re-evaluate")]
async fn re_evaluate_record(
    state: web::Data<AppState>,
    record_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let evaluation = state.evaluation_service.re_evaluate(&record_id).await?;
    Ok(HttpResponse::Ok().json(evaluation))
}

#[get("/api/practice/records")]
async fn list_practice_records(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    let pagination = query.into_inner();
    pagination.validate()?;

    let (items, total) = state
        .evaluation_service
        .history(pagination.offset(), pagination.limit())
        .await?;

    Ok(HttpResponse::Ok().json(PracticeHistoryResponse {
        items,
        total,
        offset: pagination.offset(),
        limit: pagination.limit(),
    }))
}

#[get("/api/practice/stats")]
async fn get_practice_stats(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let stats = state.evaluation_service.stats().await?;
    Ok(HttpResponse::Ok().json(PracticeStatsResponse::from(stats)))
}
