use async_trait::async_trait;

use crate::modules::course::domain::entities::{Course, CurriculumSection, COURSE_MODES};
use crate::shared::validation::{
    require_non_empty, require_non_negative, require_one_of, required_text, FieldError,
    FieldErrors,
};

/// Raw create payload, one field per wire field. Wide enough that the
/// command takes it as a struct instead of positional arguments.
#[derive(Debug, Clone, Default)]
pub struct CreateCourseInput {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub duration: Option<String>,
    pub projects: Option<i32>,
    pub modes: Option<Vec<String>>,
    pub price_online: Option<f64>,
    pub price_offline: Option<f64>,
    pub icon: Option<String>,
    pub gradient: Option<String>,
    pub curriculum: Option<Vec<CurriculumSection>>,
    pub tools: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub popular: Option<bool>,
    pub active: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateCourseCommand {
    pub title: String,
    pub short_description: String,
    pub category: String,
    pub level: String,
    pub duration: String,
    pub projects: i32,
    pub modes: Vec<String>,
    pub price_online: Option<f64>,
    pub price_offline: Option<f64>,
    pub icon: String,
    pub gradient: String,
    pub curriculum: Vec<CurriculumSection>,
    pub tools: Vec<String>,
    pub features: Vec<String>,
    pub popular: bool,
    pub active: bool,
    pub sort_order: Option<i32>,
}

impl CreateCourseCommand {
    pub fn new(input: CreateCourseInput) -> Result<Self, Vec<FieldError>> {
        let mut errors = FieldErrors::new();

        let title = required_text(&mut errors, "title", input.title);
        let short_description =
            required_text(&mut errors, "shortDescription", input.short_description);
        let category = required_text(&mut errors, "category", input.category);
        let level = required_text(&mut errors, "level", input.level);
        let duration = required_text(&mut errors, "duration", input.duration);

        let projects = match input.projects {
            None => {
                errors.push("projects", "is required");
                0
            }
            Some(count) => {
                if count < 0 {
                    errors.push("projects", "must not be negative");
                }
                count
            }
        };

        let modes = match input.modes {
            None => {
                errors.push("modes", "is required");
                Vec::new()
            }
            Some(modes) => {
                require_non_empty(&mut errors, "modes", &modes);
                for mode in &modes {
                    require_one_of(&mut errors, "modes", mode, &COURSE_MODES);
                }
                modes
            }
        };

        if let Some(price) = input.price_online {
            require_non_negative(&mut errors, "priceOnline", price);
        }
        if let Some(price) = input.price_offline {
            require_non_negative(&mut errors, "priceOffline", price);
        }

        let icon = required_text(&mut errors, "icon", input.icon);
        let gradient = required_text(&mut errors, "gradient", input.gradient);

        errors.finish()?;

        Ok(Self {
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
            curriculum: input.curriculum.unwrap_or_default(),
            tools: input.tools.unwrap_or_default(),
            features: input.features.unwrap_or_default(),
            popular: input.popular.unwrap_or(false),
            active: input.active.unwrap_or(true),
            sort_order: input.sort_order,
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCourseError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCourseUseCase: Send + Sync {
    async fn execute(&self, command: CreateCourseCommand) -> Result<Course, CreateCourseError>;
}
