use async_trait::async_trait;

use crate::modules::project::domain::entities::Project;
use crate::shared::validation::{
    optional_url, require_non_empty, require_url, required_text, FieldError, FieldErrors,
};

/// Validated create payload. Construction collects every violated field
/// before failing.
#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub featured: bool,
    pub active: bool,
    pub sort_order: Option<i32>,
}

impl CreateProjectCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        image: Option<String>,
        category: Option<String>,
        technologies: Option<Vec<String>>,
        link: Option<String>,
        github: Option<String>,
        featured: Option<bool>,
        active: Option<bool>,
        sort_order: Option<i32>,
    ) -> Result<Self, Vec<FieldError>> {
        let mut errors = FieldErrors::new();

        let title = required_text(&mut errors, "title", title);
        let description = required_text(&mut errors, "description", description);

        let image = required_text(&mut errors, "image", image);
        if !image.is_empty() {
            require_url(&mut errors, "image", &image);
        }

        let category = required_text(&mut errors, "category", category);

        let technologies = technologies.unwrap_or_default();
        require_non_empty(&mut errors, "technologies", &technologies);

        let link = optional_url(&mut errors, "link", link);
        let github = optional_url(&mut errors, "github", github);

        errors.finish()?;

        Ok(Self {
            title,
            description,
            image,
            category,
            technologies,
            link,
            github,
            featured: featured.unwrap_or(false),
            active: active.unwrap_or(true),
            sort_order,
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, command: CreateProjectCommand) -> Result<Project, CreateProjectError>;
}
