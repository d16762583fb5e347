use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(health))]
pub struct HealthApiDoc;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn health() -> Response<HealthResponse> {
    Response::OK(HealthResponse {
        status: "ok".to_string(),
    })
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health", root_path), get(health))
}
