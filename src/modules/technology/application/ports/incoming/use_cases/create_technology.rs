use async_trait::async_trait;

use crate::modules::technology::domain::entities::{Technology, TECHNOLOGY_CATEGORIES};
use crate::shared::validation::{
    require_hex_color, require_one_of, require_range, required_text, FieldError, FieldErrors,
};

#[derive(Debug, Clone)]
pub struct CreateTechnologyCommand {
    pub name: String,
    pub category: String,
    pub icon: String,
    pub expertise: i32,
    pub color: String,
    pub active: bool,
    pub sort_order: Option<i32>,
}

impl CreateTechnologyCommand {
    pub fn new(
        name: Option<String>,
        category: Option<String>,
        icon: Option<String>,
        expertise: Option<i32>,
        color: Option<String>,
        active: Option<bool>,
        sort_order: Option<i32>,
    ) -> Result<Self, Vec<FieldError>> {
        let mut errors = FieldErrors::new();

        let name = required_text(&mut errors, "name", name);

        let category = required_text(&mut errors, "category", category);
        if !category.is_empty() {
            require_one_of(&mut errors, "category", &category, &TECHNOLOGY_CATEGORIES);
        }

        let icon = required_text(&mut errors, "icon", icon);

        let expertise = match expertise {
            None => {
                errors.push("expertise", "is required");
                0
            }
            Some(value) => {
                require_range(&mut errors, "expertise", value, 0, 100);
                value
            }
        };

        let color = required_text(&mut errors, "color", color);
        if !color.is_empty() {
            require_hex_color(&mut errors, "color", &color);
        }

        errors.finish()?;

        Ok(Self {
            name,
            category,
            icon,
            expertise,
            color,
            active: active.unwrap_or(true),
            sort_order,
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTechnologyError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateTechnologyUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateTechnologyCommand,
    ) -> Result<Technology, CreateTechnologyError>;
}
