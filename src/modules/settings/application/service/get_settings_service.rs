use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::settings::application::ports::incoming::use_cases::{
    GetSettingsError, GetSettingsUseCase,
};
use crate::modules::settings::application::ports::outgoing::{
    SettingsRepository, SettingsRepositoryError,
};

pub struct GetSettingsService<R: SettingsRepository> {
    repository: R,
}

impl<R: SettingsRepository> GetSettingsService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: SettingsRepository + Send + Sync> GetSettingsUseCase for GetSettingsService<R> {
    async fn execute(&self) -> Result<BTreeMap<String, Value>, GetSettingsError> {
        let settings = self
            .repository
            .list_settings()
            .await
            .map_err(|err| match err {
                SettingsRepositoryError::NotFound => GetSettingsError::RepositoryError(
                    "unexpected not-found while listing".to_string(),
                ),
                SettingsRepositoryError::DatabaseError(msg) => {
                    GetSettingsError::RepositoryError(msg)
                }
            })?;

        Ok(settings.into_iter().map(|s| (s.key, s.value)).collect())
    }
}
