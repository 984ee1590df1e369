pub mod projects;

use crate::AppState;
use crate::db::models::api::ApiResponse;
use axum::{
    Json, Router,
    routing::{get, post},
};
use std::sync::Arc;

pub async fn health() -> Json<ApiResponse<()>> {
    Json(ApiResponse::ok("OK"))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/projects",
            post(projects::create_project).get(projects::get_projects),
        )
        .route(
            "/projects/validate",
            post(projects::validate_project_submission),
        )
        .route(
            "/projects/:project_id",
            get(projects::get_project).put(projects::update_project),
        )
        .with_state(state)
}
