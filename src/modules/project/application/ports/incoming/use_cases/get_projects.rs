use async_trait::async_trait;

use crate::modules::project::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    /// `only_active` is true for the public surface, false for admin.
    async fn execute(&self, only_active: bool) -> Result<Vec<Project>, GetProjectsError>;
}
