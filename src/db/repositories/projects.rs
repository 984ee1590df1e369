use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::db::models::project::{NewProject, Project};
use crate::error::{AppError, AppResult};

/// Storage for accepted projects. Callers only hand it records that passed
/// validation.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn insert(&self, new_project: NewProject) -> AppResult<Project>;

    async fn update(&self, project_id: Uuid, changes: NewProject) -> AppResult<Project>;

    async fn find_by_id(&self, project_id: Uuid) -> AppResult<Option<Project>>;

    /// Newest first. `search` matches titles case-insensitively.
    async fn list(
        &self,
        search: Option<&str>,
        page: i64,
        per_page: i64,
    ) -> AppResult<(Vec<Project>, i64)>;
}

#[derive(Default)]
pub struct InMemoryProjectStore {
    projects: RwLock<HashMap<Uuid, Project>>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn insert(&self, new_project: NewProject) -> AppResult<Project> {
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            title: new_project.title,
            description: new_project.description,
            category: new_project.category,
            required_skills: new_project.required_skills,
            start_date: new_project.start_date,
            end_date: new_project.end_date,
            team_size: new_project.team_size,
            payment_model: new_project.payment_model,
            stipend_amount: new_project.stipend_amount,
            deliverables: new_project.deliverables,
            created_at: now,
            updated_at: now,
        };

        self.projects
            .write()
            .await
            .insert(project.id, project.clone());
        Ok(project)
    }

    async fn update(&self, project_id: Uuid, changes: NewProject) -> AppResult<Project> {
        let mut projects = self.projects.write().await;
        let project = projects
            .get_mut(&project_id)
            .ok_or_else(|| AppError::not_found("Project"))?;

        project.title = changes.title;
        project.description = changes.description;
        project.category = changes.category;
        project.required_skills = changes.required_skills;
        project.start_date = changes.start_date;
        project.end_date = changes.end_date;
        project.team_size = changes.team_size;
        project.payment_model = changes.payment_model;
        project.stipend_amount = changes.stipend_amount;
        project.deliverables = changes.deliverables;
        project.updated_at = Utc::now();

        Ok(project.clone())
    }

    async fn find_by_id(&self, project_id: Uuid) -> AppResult<Option<Project>> {
        Ok(self.projects.read().await.get(&project_id).cloned())
    }

    async fn list(
        &self,
        search: Option<&str>,
        page: i64,
        per_page: i64,
    ) -> AppResult<(Vec<Project>, i64)> {
        let pattern = search.map(str::to_lowercase);
        let projects = self.projects.read().await;

        let mut matching: Vec<&Project> = projects
            .values()
            .filter(|p| {
                pattern
                    .as_deref()
                    .is_none_or(|pattern| p.title.to_lowercase().contains(pattern))
            })
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));

        let total_count = matching.len() as i64;
        let per_page = usize::try_from(per_page).unwrap_or(0);
        let offset = usize::try_from(page.max(1) - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(per_page);
        let page_items = matching
            .into_iter()
            .skip(offset)
            .take(per_page)
            .cloned()
            .collect();

        Ok((page_items, total_count))
    }
}
