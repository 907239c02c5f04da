use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Hard delete; removed ids are gone for good.
#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid) -> Result<(), DeleteProjectError>;
}
