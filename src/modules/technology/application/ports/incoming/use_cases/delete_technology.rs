use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTechnologyError {
    #[error("Technology not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteTechnologyUseCase: Send + Sync {
    async fn execute(&self, technology_id: Uuid) -> Result<(), DeleteTechnologyError>;
}
