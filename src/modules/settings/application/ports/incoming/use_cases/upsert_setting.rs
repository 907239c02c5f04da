use async_trait::async_trait;
use serde_json::Value;

use crate::modules::settings::domain::entities::{SiteSetting, SETTING_KEYS};
use crate::shared::patch::PatchField;
use crate::shared::validation::{require_one_of, required_text, FieldError, FieldErrors};

#[derive(Debug, Clone)]
pub struct UpsertSettingCommand {
    pub key: String,
    pub value: Value,
}

impl UpsertSettingCommand {
    /// `value` arrives as a tri-state so an explicit null (which would
    /// erase a group) is rejected distinctly from a missing field.
    pub fn new(key: Option<String>, value: PatchField<Value>) -> Result<Self, Vec<FieldError>> {
        let mut errors = FieldErrors::new();

        let key = required_text(&mut errors, "key", key);
        if !key.is_empty() {
            require_one_of(&mut errors, "key", &key, &SETTING_KEYS);
        }

        let value = match value {
            PatchField::Unset => {
                errors.push("value", "is required");
                Value::Null
            }
            PatchField::Null => {
                errors.push("value", "must not be null");
                Value::Null
            }
            PatchField::Value(value) => value,
        };

        errors.finish()?;

        Ok(Self { key, value })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpsertSettingError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpsertSettingUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpsertSettingCommand,
    ) -> Result<SiteSetting, UpsertSettingError>;
}
