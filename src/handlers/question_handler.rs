use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::{DailyQuestion, WritingMode},
        dto::response::TodayQuestionResponse,
    },
};

/// Cache read only; an empty slot comes back with `question: null` rather
/// than triggering generation.
#[get("/api/questions/today")]
async fn get_today_question(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let date_str = DailyQuestion::today_key();
    let mode = WritingMode::today();

    let cached = state.question_service.get_cached(&date_str).await?;
    Ok(HttpResponse::Ok().json(TodayQuestionResponse {
        date_str,
        mode,
        question: cached.map(|entry| entry.question),
    }))
}

/// Idempotent: repeated calls on one date hand back the identical question.
#[post("/api/questions/today/generate")]
async fn generate_today_question(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let date_str = DailyQuestion::today_key();
    let mode = WritingMode::today();

    let entry = state
        .question_service
        .get_or_generate(mode, &date_str)
        .await?;
    Ok(HttpResponse::Ok().json(TodayQuestionResponse {
        date_str,
        mode,
        question: Some(entry.question),
    }))
}

/// Always regenerates, overwriting the date's cache slot.
#[post("/api/questions/today/refresh")]
async fn refresh_today_question(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let date_str = DailyQuestion::today_key();
    let mode = WritingMode::today();

    let entry = state.question_service.generate(mode, &date_str).await?;
    Ok(HttpResponse::Ok().json(TodayQuestionResponse {
        date_str,
        mode,
        question: Some(entry.question),
    }))
}
