use uuid::Uuid;

use crate::{
    db::models::project::{NewProject, Project, ProjectCandidate},
    db::repositories::projects::ProjectStore,
    error::{AppError, AppResult},
    validation::project::validate_project,
};

pub struct ProjectsService;

impl ProjectsService {
    /// Runs the submission rules and converts the candidate into a record a
    /// store will accept.
    pub fn prepare(candidate: &ProjectCandidate) -> AppResult<NewProject> {
        let result = validate_project(candidate);
        if !result.is_valid {
            tracing::debug!(
                error_count = result.errors.len(),
                "Project submission failed validation"
            );
            return Err(AppError::field_errors(result.error_details()));
        }

        NewProject::from_candidate(candidate)
            .ok_or_else(|| AppError::internal("Validated project could not be converted"))
    }

    pub async fn create(store: &dyn ProjectStore, candidate: &ProjectCandidate) -> AppResult<Project> {
        let new_project = Self::prepare(candidate)?;
        let created = store.insert(new_project).await?;
        tracing::info!(project_id = %created.id, "Project created");
        Ok(created)
    }

    pub async fn update(
        store: &dyn ProjectStore,
        project_id: Uuid,
        candidate: &ProjectCandidate,
    ) -> AppResult<Project> {
        let changes = Self::prepare(candidate)?;
        let updated = store.update(project_id, changes).await?;
        tracing::info!(project_id = %updated.id, "Project updated");
        Ok(updated)
    }

    pub async fn get(store: &dyn ProjectStore, project_id: Uuid) -> AppResult<Project> {
        store
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::not_found("Project"))
    }

    pub async fn list(
        store: &dyn ProjectStore,
        search: Option<&str>,
        page: i64,
        per_page: i64,
    ) -> AppResult<(Vec<Project>, i64)> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());
        store.list(search, page, per_page).await
    }
}
