// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::domain::entities::Project;
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct NewProjectData {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub featured: bool,
    pub active: bool,
    pub sort_order: i32,
}

/// Merge semantics: Unset keeps the stored column. `link` and `github`
/// are nullable, so Null clears them; everywhere else commands reject
/// explicit nulls before the data reaches the adapter.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatchData {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub image: PatchField<String>,
    pub category: PatchField<String>,
    pub technologies: PatchField<Vec<String>>,
    pub link: PatchField<String>,
    pub github: PatchField<String>,
    pub featured: PatchField<bool>,
    pub active: PatchField<bool>,
    pub sort_order: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self, only_active: bool)
        -> Result<Vec<Project>, ProjectRepositoryError>;

    async fn max_sort_order(&self) -> Result<Option<i32>, ProjectRepositoryError>;

    async fn insert_project(&self, data: NewProjectData)
        -> Result<Project, ProjectRepositoryError>;

    async fn update_project(
        &self,
        project_id: Uuid,
        data: ProjectPatchData,
    ) -> Result<Project, ProjectRepositoryError>;

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError>;
}
