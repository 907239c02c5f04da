use async_trait::async_trait;

use crate::modules::settings::domain::entities::{SiteSetting, SETTING_KEYS};
use crate::shared::validation::{require_one_of, FieldError, FieldErrors};

/// Single-group read for the public site (theme colors, social links).
#[derive(Debug, Clone)]
pub struct GetSettingCommand {
    pub key: String,
}

impl GetSettingCommand {
    pub fn new(key: String) -> Result<Self, Vec<FieldError>> {
        let mut errors = FieldErrors::new();

        require_one_of(&mut errors, "key", &key, &SETTING_KEYS);

        errors.finish()?;

        Ok(Self { key })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSettingError {
    #[error("Setting not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSettingUseCase: Send + Sync {
    async fn execute(&self, command: GetSettingCommand) -> Result<SiteSetting, GetSettingError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_known_key() {
        for key in SETTING_KEYS {
            assert!(GetSettingCommand::new(key.to_string()).is_ok());
        }
    }

    #[test]
    fn an_unknown_key_is_rejected() {
        let details = GetSettingCommand::new("themes".to_string()).unwrap_err();

        assert_eq!(details[0].field, "key");
        assert_eq!(
            details[0].message,
            "must be one of: general, theme, seo, social"
        );
    }
}
