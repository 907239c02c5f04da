use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::service::application::ports::outgoing::ServicePatchData;
use crate::modules::service::domain::entities::Service;
use crate::shared::api::FieldError;
use crate::shared::patch::PatchField;
use crate::shared::validation::{self, FieldErrors};

/// Validated partial update. Fields left Unset are not written; provided
/// fields must satisfy the same constraints as on create.
#[derive(Debug, Clone)]
pub struct PatchServiceCommand {
    pub data: ServicePatchData,
}

impl PatchServiceCommand {
    pub fn new(
        title: PatchField<String>,
        description: PatchField<String>,
        icon: PatchField<String>,
        gradient: PatchField<String>,
        features: PatchField<Vec<String>>,
        active: PatchField<bool>,
        sort_order: PatchField<i32>,
    ) -> Result<Self, Vec<FieldError>> {
        let mut errors = FieldErrors::new();

        let title = validation::patch_text(&mut errors, "title", title);
        let description = validation::patch_text(&mut errors, "description", description);
        let icon = validation::patch_text(&mut errors, "icon", icon);
        let gradient = validation::patch_text(&mut errors, "gradient", gradient);

        let features = validation::reject_null(&mut errors, "features", features);
        if let Some(list) = features.as_value() {
            validation::require_non_empty(&mut errors, "features", list);
        }

        let active = validation::reject_null(&mut errors, "active", active);
        let sort_order = validation::reject_null(&mut errors, "order", sort_order);

        errors.finish()?;

        Ok(Self {
            data: ServicePatchData {
                title,
                description,
                icon,
                gradient,
                features,
                active,
                sort_order,
            },
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchServiceError {
    #[error("Service not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchServiceUseCase: Send + Sync {
    async fn execute(
        &self,
        service_id: Uuid,
        command: PatchServiceCommand,
    ) -> Result<Service, PatchServiceError>;
}
