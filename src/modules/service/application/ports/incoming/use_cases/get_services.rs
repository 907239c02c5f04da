use async_trait::async_trait;

use crate::modules::service::domain::entities::Service;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetServicesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetServicesUseCase: Send + Sync {
    /// `only_active` is set by the public endpoint; the admin list passes
    /// false and sees inactive records too.
    async fn execute(&self, only_active: bool) -> Result<Vec<Service>, GetServicesError>;
}
