use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::message::adapter::outgoing::sea_orm_entity::contact_messages::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::message::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError, NewMessageData,
};
use crate::modules::message::domain::entities::ContactMessage;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct MessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryPostgres {
    async fn list_messages(&self) -> Result<Vec<ContactMessage>, MessageRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_message).collect())
    }

    async fn insert_message(
        &self,
        data: NewMessageData,
    ) -> Result<ContactMessage, MessageRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            subject: Set(data.subject),
            message: Set(data.message),
            read: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_message(inserted))
    }

    async fn set_read(
        &self,
        message_id: Uuid,
        read: bool,
    ) -> Result<ContactMessage, MessageRepositoryError> {
        let model = ActiveModel {
            read: Set(read),
            ..Default::default()
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(message_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let updated = results
            .into_iter()
            .next()
            .ok_or(MessageRepositoryError::NotFound)?;

        Ok(model_to_message(updated))
    }

    async fn delete_message(&self, message_id: Uuid) -> Result<(), MessageRepositoryError> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(message_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(MessageRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_message(model: contact_messages::Model) -> ContactMessage {
    ContactMessage {
        id: model.id,
        name: model.name,
        email: model.email,
        subject: model.subject,
        message: model.message,
        read: model.read,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> MessageRepositoryError {
    MessageRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
