use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::FeedbackType,
        dto::{request::WeaknessQueryParams, response::WeaknessListResponse},
    },
};

#[get("/api/weakness-points")]
async fn list_weakness_points(
    state: web::Data<AppState>,
    query: web::Query<WeaknessQueryParams>,
) -> Result<HttpResponse, AppError> {
    let kind = match query.into_inner().kind {
        Some(tag) => Some(FeedbackType::from_tag(&tag).ok_or_else(|| {
            AppError::ValidationError(format!(
                "Unknown feedback type '{}', expected Caution, Suggestion or Other",
                tag
            ))
        })?),
        None => None,
    };

    let items = state.evaluation_service.list_weakness_points(kind).await?;
    let total = items.len();
    Ok(HttpResponse::Ok().json(WeaknessListResponse { items, total }))
}
