use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteServiceError {
    #[error("Service not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Hard delete; removed ids are gone for good.
#[async_trait]
pub trait DeleteServiceUseCase: Send + Sync {
    async fn execute(&self, service_id: Uuid) -> Result<(), DeleteServiceError>;
}
