use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use std::sync::Arc;

use crate::state::AppState;
use crate::types::HealthResponse;

/// Liveness check; never calls the backend
#[get("/health")]
pub async fn health(state: web::Data<Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        service: "gist".to_string(),
        model: state.config.model.clone(),
        mock: state.config.mock_mode,
        timestamp: Utc::now(),
    })
}
