use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::ProjectPatchData;
use crate::modules::project::domain::entities::Project;
use crate::shared::patch::PatchField;
use crate::shared::validation::{
    patch_text, patch_url_nullable, reject_null, require_non_empty, require_url, FieldError,
    FieldErrors,
};

/// Validated merge-patch. Present fields obey the create constraints;
/// `link`/`github` may be nulled, nothing else may.
#[derive(Debug, Clone)]
pub struct PatchProjectCommand {
    pub data: ProjectPatchData,
}

impl PatchProjectCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: PatchField<String>,
        description: PatchField<String>,
        image: PatchField<String>,
        category: PatchField<String>,
        technologies: PatchField<Vec<String>>,
        link: PatchField<String>,
        github: PatchField<String>,
        featured: PatchField<bool>,
        active: PatchField<bool>,
        sort_order: PatchField<i32>,
    ) -> Result<Self, Vec<FieldError>> {
        let mut errors = FieldErrors::new();

        let title = patch_text(&mut errors, "title", title);
        let description = patch_text(&mut errors, "description", description);

        let image = patch_text(&mut errors, "image", image);
        if let PatchField::Value(v) = &image {
            if !v.is_empty() {
                require_url(&mut errors, "image", v);
            }
        }

        let category = patch_text(&mut errors, "category", category);

        let technologies = reject_null(&mut errors, "technologies", technologies);
        if let PatchField::Value(items) = &technologies {
            require_non_empty(&mut errors, "technologies", items);
        }

        let link = patch_url_nullable(&mut errors, "link", link);
        let github = patch_url_nullable(&mut errors, "github", github);

        let featured = reject_null(&mut errors, "featured", featured);
        let active = reject_null(&mut errors, "active", active);
        let sort_order = reject_null(&mut errors, "order", sort_order);

        errors.finish()?;

        Ok(Self {
            data: ProjectPatchData {
                title,
                description,
                image,
                category,
                technologies,
                link,
                github,
                featured,
                active,
                sort_order,
            },
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        command: PatchProjectCommand,
    ) -> Result<Project, PatchProjectError>;
}
