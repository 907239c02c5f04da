use async_trait::async_trait;

use crate::modules::message::domain::entities::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMessagesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Admin inbox listing. There is no public counterpart and no active
/// filter; every message is returned, newest first.
#[async_trait]
pub trait GetMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ContactMessage>, GetMessagesError>;
}
