use async_trait::async_trait;

use crate::modules::testimonial::domain::entities::Testimonial;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTestimonialsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetTestimonialsUseCase: Send + Sync {
    /// `only_active` is true for the public surface, false for admin.
    async fn execute(&self, only_active: bool) -> Result<Vec<Testimonial>, GetTestimonialsError>;
}
