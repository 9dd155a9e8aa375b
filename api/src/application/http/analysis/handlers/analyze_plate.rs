use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    analysis::validators::AnalyzePlateRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};
use mealsnap_core::domain::analysis::{ports::AnalysisService, value_objects::AnalyzePlateInput};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzePlateResponse {
    pub response: String,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    summary = "Analyze a plate photo",
    description = "Matches the plate photo against the current menu snapshot and returns the model's nutrition estimate",
    request_body = AnalyzePlateRequest,
    responses(
        (status = 200, body = AnalyzePlateResponse),
        (status = 400, body = ErrorResponse),
        (status = 500, body = ErrorResponse)
    ),
)]
pub async fn analyze_plate(
    State(state): State<AppState>,
    Json(request): Json<AnalyzePlateRequest>,
) -> Result<Response<AnalyzePlateResponse>, ApiError> {
    request.validate().map_err(ApiError::from_validation)?;

    tracing::debug!(image_len = request.image.len(), "analyze request accepted");

    let analysis = state
        .service
        .analyze_plate(AnalyzePlateInput {
            image_base64: request.image,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzePlateResponse {
        response: analysis.summary,
    }))
}
