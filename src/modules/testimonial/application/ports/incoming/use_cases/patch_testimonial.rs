use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::testimonial::application::ports::outgoing::TestimonialPatchData;
use crate::modules::testimonial::domain::entities::Testimonial;
use crate::shared::patch::PatchField;
use crate::shared::validation::{
    patch_text, patch_url_nullable, reject_null, require_range, FieldError, FieldErrors,
};

#[derive(Debug, Clone)]
pub struct PatchTestimonialCommand {
    pub data: TestimonialPatchData,
}

impl PatchTestimonialCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: PatchField<String>,
        role: PatchField<String>,
        company: PatchField<String>,
        quote: PatchField<String>,
        image: PatchField<String>,
        rating: PatchField<i32>,
        active: PatchField<bool>,
        sort_order: PatchField<i32>,
    ) -> Result<Self, Vec<FieldError>> {
        let mut errors = FieldErrors::new();

        let name = patch_text(&mut errors, "name", name);
        let role = patch_text(&mut errors, "role", role);
        let company = patch_text(&mut errors, "company", company);
        let quote = patch_text(&mut errors, "quote", quote);
        let image = patch_url_nullable(&mut errors, "image", image);

        let rating = reject_null(&mut errors, "rating", rating);
        if let PatchField::Value(r) = rating {
            require_range(&mut errors, "rating", r, 1, 5);
        }

        let active = reject_null(&mut errors, "active", active);
        let sort_order = reject_null(&mut errors, "order", sort_order);

        errors.finish()?;

        Ok(Self {
            data: TestimonialPatchData {
                name,
                role,
                company,
                quote,
                image,
                rating,
                active,
                sort_order,
            },
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchTestimonialError {
    #[error("Testimonial not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchTestimonialUseCase: Send + Sync {
    async fn execute(
        &self,
        testimonial_id: Uuid,
        command: PatchTestimonialCommand,
    ) -> Result<Testimonial, PatchTestimonialError>;
}
