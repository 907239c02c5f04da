use async_trait::async_trait;
use serde_json::Value;

use crate::modules::content::domain::entities::{SiteContent, CONTENT_SECTIONS};
use crate::shared::validation::{require_one_of, FieldError, FieldErrors};

/// The body is the section document itself and is deliberately not
/// schema-checked; only the section name is constrained.
#[derive(Debug, Clone)]
pub struct UpsertContentCommand {
    pub section: String,
    pub document: Value,
}

impl UpsertContentCommand {
    pub fn new(section: String, document: Value) -> Result<Self, Vec<FieldError>> {
        let mut errors = FieldErrors::new();

        require_one_of(&mut errors, "section", &section, &CONTENT_SECTIONS);

        errors.finish()?;

        Ok(Self { section, document })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpsertContentError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpsertContentUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpsertContentCommand,
    ) -> Result<SiteContent, UpsertContentError>;
}
