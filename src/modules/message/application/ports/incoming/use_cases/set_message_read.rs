use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::message::domain::entities::ContactMessage;
use crate::shared::validation::{FieldError, FieldErrors};

/// A message update is the read flag and nothing else.
#[derive(Debug, Clone)]
pub struct SetMessageReadCommand {
    pub read: bool,
}

impl SetMessageReadCommand {
    pub fn new(read: Option<bool>) -> Result<Self, Vec<FieldError>> {
        let mut errors = FieldErrors::new();

        let read = match read {
            None => {
                errors.push("read", "is required");
                false
            }
            Some(read) => read,
        };

        errors.finish()?;

        Ok(Self { read })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetMessageReadError {
    #[error("Message not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SetMessageReadUseCase: Send + Sync {
    async fn execute(
        &self,
        message_id: Uuid,
        command: SetMessageReadCommand,
    ) -> Result<ContactMessage, SetMessageReadError>;
}
