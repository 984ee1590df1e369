use crate::AppState;
use crate::db::models::api::{ApiResponse, Pagination, ResponseMeta};
use crate::db::models::project::{ProjectCandidate, ProjectListQuery, ProjectListResponse};
use crate::error::AppResult;
use crate::services::ProjectsService;
use crate::validation::{JsonBody, ValidatedQuery, validate_project};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

/// 仅校验，不保存
pub async fn validate_project_submission(
    JsonBody(candidate): JsonBody<ProjectCandidate>,
) -> impl IntoResponse {
    let result = validate_project(&candidate);
    let message = if result.is_valid {
        "Project is valid"
    } else {
        "Project has validation errors"
    };
    Json(ApiResponse::success(result, message))
}

pub async fn create_project(
    State(state): State<Arc<AppState>>,
    JsonBody(candidate): JsonBody<ProjectCandidate>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectsService::create(state.projects.as_ref(), &candidate).await?;
    let response = ApiResponse::created(project, "Project created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
    JsonBody(candidate): JsonBody<ProjectCandidate>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectsService::update(state.projects.as_ref(), project_id, &candidate).await?;
    Ok(Json(ApiResponse::success(project, "Project updated successfully")))
}

pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectsService::get(state.projects.as_ref(), project_id).await?;
    Ok(Json(ApiResponse::success(project, "Project retrieved successfully")))
}

pub async fn get_projects(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(params): ValidatedQuery<ProjectListQuery>,
) -> AppResult<impl IntoResponse> {
    let page = params.page.unwrap_or(1);
    let per_page = params.per_page.unwrap_or(state.config.default_page_size);

    let (projects, total_count) =
        ProjectsService::list(state.projects.as_ref(), params.search.as_deref(), page, per_page)
            .await?;

    let meta = ResponseMeta {
        pagination: Some(Pagination::new(page, per_page, total_count)),
        total_count: Some(total_count),
    };
    let response = ApiResponse::success_with_meta(
        ProjectListResponse {
            projects,
            total_count,
        },
        "Projects retrieved successfully",
        meta,
    );
    Ok(Json(response))
}
