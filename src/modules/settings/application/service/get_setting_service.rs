use async_trait::async_trait;

use crate::modules::settings::application::ports::incoming::use_cases::{
    GetSettingCommand, GetSettingError, GetSettingUseCase,
};
use crate::modules::settings::application::ports::outgoing::{
    SettingsRepository, SettingsRepositoryError,
};
use crate::modules::settings::domain::entities::SiteSetting;

pub struct GetSettingService<R: SettingsRepository> {
    repository: R,
}

impl<R: SettingsRepository> GetSettingService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: SettingsRepository + Send + Sync> GetSettingUseCase for GetSettingService<R> {
    async fn execute(&self, command: GetSettingCommand) -> Result<SiteSetting, GetSettingError> {
        self.repository
            .get_setting(&command.key)
            .await
            .map_err(|err| match err {
                SettingsRepositoryError::NotFound => GetSettingError::NotFound,
                SettingsRepositoryError::DatabaseError(msg) => {
                    GetSettingError::RepositoryError(msg)
                }
            })
    }
}
