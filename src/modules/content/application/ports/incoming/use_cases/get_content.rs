use async_trait::async_trait;

use crate::modules::content::domain::entities::{SiteContent, CONTENT_SECTIONS};
use crate::shared::validation::{require_one_of, FieldError, FieldErrors};

/// Section reads validate the name too: an unknown section is a typo
/// (400), while a known one that was never written is a 404.
#[derive(Debug, Clone)]
pub struct GetContentCommand {
    pub section: String,
}

impl GetContentCommand {
    pub fn new(section: String) -> Result<Self, Vec<FieldError>> {
        let mut errors = FieldErrors::new();

        require_one_of(&mut errors, "section", &section, &CONTENT_SECTIONS);

        errors.finish()?;

        Ok(Self { section })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContentError {
    #[error("Section not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetContentUseCase: Send + Sync {
    async fn execute(&self, command: GetContentCommand) -> Result<SiteContent, GetContentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_known_section() {
        for section in CONTENT_SECTIONS {
            assert!(GetContentCommand::new(section.to_string()).is_ok());
        }
    }

    #[test]
    fn an_unknown_section_is_rejected() {
        let details = GetContentCommand::new("heroes".to_string()).unwrap_err();

        assert_eq!(details[0].field, "section");
        assert_eq!(
            details[0].message,
            "must be one of: hero, about, services, portfolio, contact, footer"
        );
    }
}
