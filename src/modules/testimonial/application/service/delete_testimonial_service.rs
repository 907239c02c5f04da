use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::testimonial::application::ports::incoming::use_cases::{
    DeleteTestimonialError, DeleteTestimonialUseCase,
};
use crate::modules::testimonial::application::ports::outgoing::{
    TestimonialRepository, TestimonialRepositoryError,
};

pub struct DeleteTestimonialService<R: TestimonialRepository> {
    repository: R,
}

impl<R: TestimonialRepository> DeleteTestimonialService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: TestimonialRepository + Send + Sync> DeleteTestimonialUseCase
    for DeleteTestimonialService<R>
{
    async fn execute(&self, testimonial_id: Uuid) -> Result<(), DeleteTestimonialError> {
        self.repository
            .delete_testimonial(testimonial_id)
            .await
            .map_err(|err| match err {
                TestimonialRepositoryError::NotFound => DeleteTestimonialError::NotFound,
                TestimonialRepositoryError::DatabaseError(msg) => {
                    DeleteTestimonialError::RepositoryError(msg)
                }
            })
    }
}
