mod get_setting_service;
mod get_settings_service;
mod upsert_setting_service;

pub use get_setting_service::GetSettingService;
pub use get_settings_service::GetSettingsService;
pub use upsert_setting_service::UpsertSettingService;
