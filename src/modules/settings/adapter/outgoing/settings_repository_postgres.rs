use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

use crate::modules::settings::adapter::outgoing::sea_orm_entity::site_settings::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::settings::application::ports::outgoing::{
    SettingsRepository, SettingsRepositoryError,
};
use crate::modules::settings::domain::entities::SiteSetting;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct SettingsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SettingsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryPostgres {
    async fn list_settings(&self) -> Result<Vec<SiteSetting>, SettingsRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Key)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_setting).collect())
    }

    async fn get_setting(&self, key: &str) -> Result<SiteSetting, SettingsRepositoryError> {
        let model = Entity::find_by_id(key.to_string())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(SettingsRepositoryError::NotFound)?;

        Ok(model_to_setting(model))
    }

    async fn upsert_setting(
        &self,
        key: String,
        value: Value,
    ) -> Result<SiteSetting, SettingsRepositoryError> {
        let model = ActiveModel {
            key: Set(key),
            value: Set(value),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        let stored = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Key)
                    .update_columns([Column::Value, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model_to_setting(stored))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_setting(model: site_settings::Model) -> SiteSetting {
    SiteSetting {
        key: model.key,
        value: model.value,
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> SettingsRepositoryError {
    SettingsRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
