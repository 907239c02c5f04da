mod get_setting;
mod get_settings;
mod upsert_setting;

pub use get_setting::{GetSettingCommand, GetSettingError, GetSettingUseCase};
pub use get_settings::{GetSettingsError, GetSettingsUseCase};
pub use upsert_setting::{UpsertSettingCommand, UpsertSettingError, UpsertSettingUseCase};
