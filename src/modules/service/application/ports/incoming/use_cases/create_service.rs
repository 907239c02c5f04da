use async_trait::async_trait;

use crate::modules::service::domain::entities::Service;
use crate::shared::api::FieldError;
use crate::shared::validation::{self, FieldErrors};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Validated create input. Construction collects every violated field,
/// so a rejected request reports all problems in one response.
#[derive(Debug, Clone)]
pub struct CreateServiceCommand {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub gradient: String,
    pub features: Vec<String>,
    pub active: bool,
    /// None means "assign the next rank" (max + 1).
    pub sort_order: Option<i32>,
}

impl CreateServiceCommand {
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        icon: Option<String>,
        gradient: Option<String>,
        features: Option<Vec<String>>,
        active: Option<bool>,
        sort_order: Option<i32>,
    ) -> Result<Self, Vec<FieldError>> {
        let mut errors = FieldErrors::new();

        let title = validation::required_text(&mut errors, "title", title);
        let description = validation::required_text(&mut errors, "description", description);
        let icon = validation::required_text(&mut errors, "icon", icon);
        let gradient = validation::required_text(&mut errors, "gradient", gradient);

        let features = features.unwrap_or_default();
        validation::require_non_empty(&mut errors, "features", &features);

        errors.finish()?;

        Ok(Self {
            title,
            description,
            icon,
            gradient,
            features,
            active: active.unwrap_or(true),
            sort_order,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors + use case trait
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateServiceError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateServiceUseCase: Send + Sync {
    async fn execute(&self, command: CreateServiceCommand)
        -> Result<Service, CreateServiceError>;
}
