use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::message::application::ports::incoming::use_cases::{
    DeleteMessageError, DeleteMessageUseCase,
};
use crate::modules::message::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError,
};

pub struct DeleteMessageService<R: MessageRepository> {
    repository: R,
}

impl<R: MessageRepository> DeleteMessageService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: MessageRepository + Send + Sync> DeleteMessageUseCase for DeleteMessageService<R> {
    async fn execute(&self, message_id: Uuid) -> Result<(), DeleteMessageError> {
        self.repository
            .delete_message(message_id)
            .await
            .map_err(|err| match err {
                MessageRepositoryError::NotFound => DeleteMessageError::NotFound,
                MessageRepositoryError::DatabaseError(msg) => {
                    DeleteMessageError::RepositoryError(msg)
                }
            })
    }
}
