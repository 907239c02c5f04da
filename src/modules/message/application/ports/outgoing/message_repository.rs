use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::message::domain::entities::ContactMessage;

#[derive(Debug, Clone)]
pub struct NewMessageData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Message not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Messages have no merge-patch: the only mutation after submission is
/// the read flag, so the port takes the flag directly.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Newest first, so the inbox shows fresh mail at the top.
    async fn list_messages(&self) -> Result<Vec<ContactMessage>, MessageRepositoryError>;

    async fn insert_message(
        &self,
        data: NewMessageData,
    ) -> Result<ContactMessage, MessageRepositoryError>;

    async fn set_read(
        &self,
        message_id: Uuid,
        read: bool,
    ) -> Result<ContactMessage, MessageRepositoryError>;

    async fn delete_message(&self, message_id: Uuid) -> Result<(), MessageRepositoryError>;
}
