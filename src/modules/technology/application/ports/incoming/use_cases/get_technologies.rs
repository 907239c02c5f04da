use async_trait::async_trait;

use crate::modules::technology::domain::entities::Technology;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTechnologiesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetTechnologiesUseCase: Send + Sync {
    /// `only_active` is true for the public site, false for the admin panel.
    async fn execute(&self, only_active: bool) -> Result<Vec<Technology>, GetTechnologiesError>;
}
