use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::message::application::ports::incoming::use_cases::{
    SetMessageReadCommand, SetMessageReadError, SetMessageReadUseCase,
};
use crate::modules::message::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError,
};
use crate::modules::message::domain::entities::ContactMessage;

pub struct SetMessageReadService<R: MessageRepository> {
    repository: R,
}

impl<R: MessageRepository> SetMessageReadService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: MessageRepository + Send + Sync> SetMessageReadUseCase for SetMessageReadService<R> {
    async fn execute(
        &self,
        message_id: Uuid,
        command: SetMessageReadCommand,
    ) -> Result<ContactMessage, SetMessageReadError> {
        self.repository
            .set_read(message_id, command.read)
            .await
            .map_err(|err| match err {
                MessageRepositoryError::NotFound => SetMessageReadError::NotFound,
                MessageRepositoryError::DatabaseError(msg) => {
                    SetMessageReadError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::Utc;

    use super::*;
    use crate::modules::message::application::ports::outgoing::NewMessageData;

    struct MockMessageRepo {
        result: Result<(), MessageRepositoryError>,
        seen: Arc<Mutex<Option<(Uuid, bool)>>>,
    }

    #[async_trait]
    impl MessageRepository for MockMessageRepo {
        async fn list_messages(&self) -> Result<Vec<ContactMessage>, MessageRepositoryError> {
            unreachable!()
        }

        async fn insert_message(
            &self,
            _data: NewMessageData,
        ) -> Result<ContactMessage, MessageRepositoryError> {
            unreachable!()
        }

        async fn set_read(
            &self,
            id: Uuid,
            read: bool,
        ) -> Result<ContactMessage, MessageRepositoryError> {
            *self.seen.lock().unwrap() = Some((id, read));
            self.result.clone().map(|_| ContactMessage {
                id,
                name: "Jo".to_string(),
                email: "jo@x.com".to_string(),
                subject: "Hello there".to_string(),
                message: "This is a test message.".to_string(),
                read,
                created_at: Utc::now(),
            })
        }

        async fn delete_message(&self, _id: Uuid) -> Result<(), MessageRepositoryError> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn forwards_the_id_and_flag_to_the_repository() {
        let seen = Arc::new(Mutex::new(None));
        let service = SetMessageReadService::new(MockMessageRepo {
            result: Ok(()),
            seen: seen.clone(),
        });
        let id = Uuid::new_v4();

        let updated = service
            .execute(id, SetMessageReadCommand::new(Some(true)).unwrap())
            .await
            .unwrap();

        assert!(updated.read);
        assert_eq!(*seen.lock().unwrap(), Some((id, true)));
    }

    #[tokio::test]
    async fn missing_rows_surface_as_not_found() {
        let service = SetMessageReadService::new(MockMessageRepo {
            result: Err(MessageRepositoryError::NotFound),
            seen: Arc::new(Mutex::new(None)),
        });

        let result = service
            .execute(Uuid::new_v4(), SetMessageReadCommand::new(Some(true)).unwrap())
            .await;

        assert!(matches!(result, Err(SetMessageReadError::NotFound)));
    }

    #[tokio::test]
    async fn maps_database_errors() {
        let service = SetMessageReadService::new(MockMessageRepo {
            result: Err(MessageRepositoryError::DatabaseError(
                "connection timeout".to_string(),
            )),
            seen: Arc::new(Mutex::new(None)),
        });

        let result = service
            .execute(Uuid::new_v4(), SetMessageReadCommand::new(Some(false)).unwrap())
            .await;

        assert!(matches!(
            result,
            Err(SetMessageReadError::RepositoryError(msg)) if msg == "connection timeout"
        ));
    }
}
