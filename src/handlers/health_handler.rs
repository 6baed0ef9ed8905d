use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::response::HealthResponse};

#[get("/api/health")]
async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let database = match state.db.health_check().await {
        Ok(()) => "up".to_string(),
        Err(e) => {
            log::warn!("Database health check failed: {}", e);
            "down".to_string()
        }
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        database,
    }))
}
