use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use crate::modules::content::adapter::outgoing::sea_orm_entity::site_content::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};
use crate::modules::content::domain::entities::SiteContent;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ContentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentRepository for ContentRepositoryPostgres {
    async fn get_section(&self, section: &str) -> Result<SiteContent, ContentRepositoryError> {
        let model = Entity::find_by_id(section.to_string())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ContentRepositoryError::NotFound)?;

        Ok(model_to_content(model))
    }

    async fn upsert_section(
        &self,
        section: String,
        document: Value,
    ) -> Result<SiteContent, ContentRepositoryError> {
        let model = ActiveModel {
            section: Set(section),
            content: Set(document),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        // Single-statement insert-or-overwrite keyed on the section name.
        let stored = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Section)
                    .update_columns([Column::Content, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model_to_content(stored))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_content(model: site_content::Model) -> SiteContent {
    SiteContent {
        section: model.section,
        content: model.content,
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
