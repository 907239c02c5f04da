use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTestimonialError {
    #[error("Testimonial not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteTestimonialUseCase: Send + Sync {
    async fn execute(&self, testimonial_id: Uuid) -> Result<(), DeleteTestimonialError>;
}
