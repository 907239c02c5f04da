use async_trait::async_trait;

use crate::modules::message::application::ports::incoming::use_cases::{
    GetMessagesError, GetMessagesUseCase,
};
use crate::modules::message::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError,
};
use crate::modules::message::domain::entities::ContactMessage;

pub struct GetMessagesService<R: MessageRepository> {
    repository: R,
}

impl<R: MessageRepository> GetMessagesService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: MessageRepository + Send + Sync> GetMessagesUseCase for GetMessagesService<R> {
    async fn execute(&self) -> Result<Vec<ContactMessage>, GetMessagesError> {
        self.repository.list_messages().await.map_err(|err| match err {
            MessageRepositoryError::NotFound => {
                GetMessagesError::RepositoryError("unexpected not-found while listing".to_string())
            }
            MessageRepositoryError::DatabaseError(msg) => GetMessagesError::RepositoryError(msg),
        })
    }
}
