use std::sync::Arc;

use crate::modules::settings::application::ports::incoming::use_cases::{
    GetSettingUseCase, GetSettingsUseCase, UpsertSettingUseCase,
};

#[derive(Clone)]
pub struct SettingsUseCases {
    pub get_all: Arc<dyn GetSettingsUseCase + Send + Sync>,
    pub get_one: Arc<dyn GetSettingUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertSettingUseCase + Send + Sync>,
}
