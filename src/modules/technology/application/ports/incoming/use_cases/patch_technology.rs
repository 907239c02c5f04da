use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::technology::application::ports::outgoing::TechnologyPatchData;
use crate::modules::technology::domain::entities::{Technology, TECHNOLOGY_CATEGORIES};
use crate::shared::patch::PatchField;
use crate::shared::validation::{
    patch_text, reject_null, require_hex_color, require_one_of, require_range, FieldError,
    FieldErrors,
};

#[derive(Debug, Clone)]
pub struct PatchTechnologyCommand {
    pub data: TechnologyPatchData,
}

impl PatchTechnologyCommand {
    pub fn new(
        name: PatchField<String>,
        category: PatchField<String>,
        icon: PatchField<String>,
        expertise: PatchField<i32>,
        color: PatchField<String>,
        active: PatchField<bool>,
        sort_order: PatchField<i32>,
    ) -> Result<Self, Vec<FieldError>> {
        let mut errors = FieldErrors::new();

        let name = patch_text(&mut errors, "name", name);

        let category = patch_text(&mut errors, "category", category);
        if let PatchField::Value(c) = &category {
            if !c.is_empty() {
                require_one_of(&mut errors, "category", c, &TECHNOLOGY_CATEGORIES);
            }
        }

        let icon = patch_text(&mut errors, "icon", icon);

        let expertise = reject_null(&mut errors, "expertise", expertise);
        if let PatchField::Value(e) = expertise {
            require_range(&mut errors, "expertise", e, 0, 100);
        }

        let color = patch_text(&mut errors, "color", color);
        if let PatchField::Value(c) = &color {
            if !c.is_empty() {
                require_hex_color(&mut errors, "color", c);
            }
        }

        let active = reject_null(&mut errors, "active", active);
        let sort_order = reject_null(&mut errors, "order", sort_order);

        errors.finish()?;

        Ok(Self {
            data: TechnologyPatchData {
                name,
                category,
                icon,
                expertise,
                color,
                active,
                sort_order,
            },
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchTechnologyError {
    #[error("Technology not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchTechnologyUseCase: Send + Sync {
    async fn execute(
        &self,
        technology_id: Uuid,
        command: PatchTechnologyCommand,
    ) -> Result<Technology, PatchTechnologyError>;
}
