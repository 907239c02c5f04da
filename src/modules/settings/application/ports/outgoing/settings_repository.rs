use async_trait::async_trait;
use serde_json::Value;

use crate::modules::settings::domain::entities::SiteSetting;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsRepositoryError {
    #[error("Setting not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Every stored group; missing keys simply have no row yet.
    async fn list_settings(&self) -> Result<Vec<SiteSetting>, SettingsRepositoryError>;

    async fn get_setting(&self, key: &str) -> Result<SiteSetting, SettingsRepositoryError>;

    async fn upsert_setting(
        &self,
        key: String,
        value: Value,
    ) -> Result<SiteSetting, SettingsRepositoryError>;
}
