use async_trait::async_trait;

use crate::modules::message::application::ports::incoming::use_cases::{
    SubmitMessageCommand, SubmitMessageError, SubmitMessageUseCase,
};
use crate::modules::message::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError, NewMessageData,
};
use crate::modules::message::domain::entities::ContactMessage;

pub struct SubmitMessageService<R: MessageRepository> {
    repository: R,
}

impl<R: MessageRepository> SubmitMessageService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: MessageRepository + Send + Sync> SubmitMessageUseCase for SubmitMessageService<R> {
    async fn execute(
        &self,
        command: SubmitMessageCommand,
    ) -> Result<ContactMessage, SubmitMessageError> {
        self.repository
            .insert_message(NewMessageData {
                name: command.name,
                email: command.email,
                subject: command.subject,
                message: command.message,
            })
            .await
            .map_err(|err| match err {
                MessageRepositoryError::NotFound => SubmitMessageError::RepositoryError(
                    "unexpected not-found while inserting".to_string(),
                ),
                MessageRepositoryError::DatabaseError(msg) => {
                    SubmitMessageError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    struct MockMessageRepo {
        insert_fails: bool,
        seen: Arc<Mutex<Option<NewMessageData>>>,
    }

    #[async_trait]
    impl MessageRepository for MockMessageRepo {
        async fn list_messages(&self) -> Result<Vec<ContactMessage>, MessageRepositoryError> {
            unreachable!()
        }

        async fn insert_message(
            &self,
            data: NewMessageData,
        ) -> Result<ContactMessage, MessageRepositoryError> {
            if self.insert_fails {
                return Err(MessageRepositoryError::DatabaseError(
                    "connection timeout".to_string(),
                ));
            }
            *self.seen.lock().unwrap() = Some(data.clone());
            Ok(ContactMessage {
                id: Uuid::new_v4(),
                name: data.name,
                email: data.email,
                subject: data.subject,
                message: data.message,
                read: false,
                created_at: Utc::now(),
            })
        }

        async fn set_read(
            &self,
            _id: Uuid,
            _read: bool,
        ) -> Result<ContactMessage, MessageRepositoryError> {
            unreachable!()
        }

        async fn delete_message(&self, _id: Uuid) -> Result<(), MessageRepositoryError> {
            unreachable!()
        }
    }

    fn valid_command() -> SubmitMessageCommand {
        SubmitMessageCommand::new(
            Some("Jo".to_string()),
            Some("jo@x.com".to_string()),
            Some("Hello there".to_string()),
            Some("This is a test message.".to_string()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn stores_the_submission_unread() {
        let seen = Arc::new(Mutex::new(None));
        let service = SubmitMessageService::new(MockMessageRepo {
            insert_fails: false,
            seen: seen.clone(),
        });

        let message = service.execute(valid_command()).await.unwrap();

        assert!(!message.read);
        let data = seen.lock().unwrap().clone().unwrap();
        assert_eq!(data.email, "jo@x.com");
        assert_eq!(data.subject, "Hello there");
    }

    #[tokio::test]
    async fn maps_database_errors() {
        let service = SubmitMessageService::new(MockMessageRepo {
            insert_fails: true,
            seen: Arc::new(Mutex::new(None)),
        });

        let result = service.execute(valid_command()).await;

        assert!(matches!(
            result,
            Err(SubmitMessageError::RepositoryError(msg)) if msg == "connection timeout"
        ));
    }
}
