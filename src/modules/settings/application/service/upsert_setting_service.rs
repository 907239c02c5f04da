use async_trait::async_trait;

use crate::modules::settings::application::ports::incoming::use_cases::{
    UpsertSettingCommand, UpsertSettingError, UpsertSettingUseCase,
};
use crate::modules::settings::application::ports::outgoing::{
    SettingsRepository, SettingsRepositoryError,
};
use crate::modules::settings::domain::entities::SiteSetting;

pub struct UpsertSettingService<R: SettingsRepository> {
    repository: R,
}

impl<R: SettingsRepository> UpsertSettingService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: SettingsRepository + Send + Sync> UpsertSettingUseCase for UpsertSettingService<R> {
    async fn execute(
        &self,
        command: UpsertSettingCommand,
    ) -> Result<SiteSetting, UpsertSettingError> {
        self.repository
            .upsert_setting(command.key, command.value)
            .await
            .map_err(|err| match err {
                SettingsRepositoryError::NotFound => UpsertSettingError::RepositoryError(
                    "unexpected not-found while upserting".to_string(),
                ),
                SettingsRepositoryError::DatabaseError(msg) => {
                    UpsertSettingError::RepositoryError(msg)
                }
            })
    }
}
