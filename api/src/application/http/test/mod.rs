use axum::{Router, routing::get};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TestResponse {
    pub message: String,
    pub timestamp: String,
    pub scraping_test: String,
}

#[utoipa::path(
    get,
    path = "/test",
    tag = "health",
    summary = "Smoke probe",
    responses((status = 200, body = TestResponse)),
)]
pub async fn test_probe() -> Response<TestResponse> {
    Response::OK(TestResponse {
        message: String::from("Server is running!"),
        timestamp: Utc::now().to_rfc3339(),
        scraping_test: String::from("Use /analyze endpoint with image data"),
    })
}

pub fn test_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/test"), get(test_probe))
}
