use axum::{Router, routing::post};

use super::handlers::analyze_plate::analyze_plate;
use crate::application::http::server::app_state::AppState;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/analyze", state.args.server.root_path),
        post(analyze_plate),
    )
}
