use async_trait::async_trait;

use crate::modules::testimonial::domain::entities::Testimonial;
use crate::shared::validation::{
    optional_url, require_range, required_text, FieldError, FieldErrors,
};

#[derive(Debug, Clone)]
pub struct CreateTestimonialCommand {
    pub name: String,
    pub role: String,
    pub company: String,
    pub quote: String,
    pub image: Option<String>,
    pub rating: i32,
    pub active: bool,
    pub sort_order: Option<i32>,
}

impl CreateTestimonialCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Option<String>,
        role: Option<String>,
        company: Option<String>,
        quote: Option<String>,
        image: Option<String>,
        rating: Option<i32>,
        active: Option<bool>,
        sort_order: Option<i32>,
    ) -> Result<Self, Vec<FieldError>> {
        let mut errors = FieldErrors::new();

        let name = required_text(&mut errors, "name", name);
        let role = required_text(&mut errors, "role", role);
        let company = required_text(&mut errors, "company", company);
        let quote = required_text(&mut errors, "quote", quote);
        let image = optional_url(&mut errors, "image", image);

        let rating = match rating {
            None => {
                errors.push("rating", "is required");
                0
            }
            Some(r) => {
                require_range(&mut errors, "rating", r, 1, 5);
                r
            }
        };

        errors.finish()?;

        Ok(Self {
            name,
            role,
            company,
            quote,
            image,
            rating,
            active: active.unwrap_or(true),
            sort_order,
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTestimonialError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateTestimonialUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateTestimonialCommand,
    ) -> Result<Testimonial, CreateTestimonialError>;
}
