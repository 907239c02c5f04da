mod get_public_setting;
mod get_settings;
mod update_settings;

pub use get_public_setting::get_public_setting_handler;
pub use get_settings::get_settings_handler;
pub use update_settings::update_settings_handler;
