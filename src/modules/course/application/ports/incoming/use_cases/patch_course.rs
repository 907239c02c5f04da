use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::course::application::ports::outgoing::CoursePatchData;
use crate::modules::course::domain::entities::{Course, CurriculumSection, COURSE_MODES};
use crate::shared::patch::PatchField;
use crate::shared::validation::{
    patch_text, reject_null, require_non_empty, require_non_negative, require_one_of, FieldError,
    FieldErrors,
};

/// Raw patch payload, one field per wire field.
#[derive(Debug, Clone, Default)]
pub struct PatchCourseInput {
    pub title: PatchField<String>,
    pub short_description: PatchField<String>,
    pub category: PatchField<String>,
    pub level: PatchField<String>,
    pub duration: PatchField<String>,
    pub projects: PatchField<i32>,
    pub modes: PatchField<Vec<String>>,
    pub price_online: PatchField<f64>,
    pub price_offline: PatchField<f64>,
    pub icon: PatchField<String>,
    pub gradient: PatchField<String>,
    pub curriculum: PatchField<Vec<CurriculumSection>>,
    pub tools: PatchField<Vec<String>>,
    pub features: PatchField<Vec<String>>,
    pub popular: PatchField<bool>,
    pub active: PatchField<bool>,
    pub sort_order: PatchField<i32>,
}

#[derive(Debug, Clone)]
pub struct PatchCourseCommand {
    pub data: CoursePatchData,
}

impl PatchCourseCommand {
    pub fn new(input: PatchCourseInput) -> Result<Self, Vec<FieldError>> {
        let mut errors = FieldErrors::new();

        let title = patch_text(&mut errors, "title", input.title);
        let short_description =
            patch_text(&mut errors, "shortDescription", input.short_description);
        let category = patch_text(&mut errors, "category", input.category);
        let level = patch_text(&mut errors, "level", input.level);
        let duration = patch_text(&mut errors, "duration", input.duration);

        let projects = reject_null(&mut errors, "projects", input.projects);
        if let PatchField::Value(count) = projects {
            if count < 0 {
                errors.push("projects", "must not be negative");
            }
        }

        let modes = reject_null(&mut errors, "modes", input.modes);
        if let PatchField::Value(modes) = &modes {
            require_non_empty(&mut errors, "modes", modes);
            for mode in modes {
                require_one_of(&mut errors, "modes", mode, &COURSE_MODES);
            }
        }

        // Prices are nullable: explicit null clears them.
        if let PatchField::Value(price) = input.price_online {
            require_non_negative(&mut errors, "priceOnline", price);
        }
        if let PatchField::Value(price) = input.price_offline {
            require_non_negative(&mut errors, "priceOffline", price);
        }

        let icon = patch_text(&mut errors, "icon", input.icon);
        let gradient = patch_text(&mut errors, "gradient", input.gradient);

        let curriculum = reject_null(&mut errors, "curriculum", input.curriculum);
        let tools = reject_null(&mut errors, "tools", input.tools);
        let features = reject_null(&mut errors, "features", input.features);
        let popular = reject_null(&mut errors, "popular", input.popular);
        let active = reject_null(&mut errors, "active", input.active);
        let sort_order = reject_null(&mut errors, "order", input.sort_order);

        errors.finish()?;

        Ok(Self {
            data: CoursePatchData {
                title,
                short_description,
                category,
                level,
                duration,
                projects,
                modes,
                price_online: input.price_online,
                price_offline: input.price_offline,
                icon,
                gradient,
                curriculum,
                tools,
                features,
                popular,
                active,
                sort_order,
            },
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchCourseError {
    #[error("Course not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchCourseUseCase: Send + Sync {
    async fn execute(
        &self,
        course_id: Uuid,
        command: PatchCourseCommand,
    ) -> Result<Course, PatchCourseError>;
}
