use async_trait::async_trait;

use crate::modules::testimonial::application::ports::incoming::use_cases::{
    GetTestimonialsError, GetTestimonialsUseCase,
};
use crate::modules::testimonial::application::ports::outgoing::{
    TestimonialRepository, TestimonialRepositoryError,
};
use crate::modules::testimonial::domain::entities::Testimonial;

pub struct GetTestimonialsService<R: TestimonialRepository> {
    repository: R,
}

impl<R: TestimonialRepository> GetTestimonialsService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: TestimonialRepository + Send + Sync> GetTestimonialsUseCase for GetTestimonialsService<R> {
    async fn execute(&self, only_active: bool) -> Result<Vec<Testimonial>, GetTestimonialsError> {
        self.repository
            .list_testimonials(only_active)
            .await
            .map_err(|err| match err {
                TestimonialRepositoryError::NotFound => GetTestimonialsError::RepositoryError(
                    "unexpected not-found while listing".to_string(),
                ),
                TestimonialRepositoryError::DatabaseError(msg) => {
                    GetTestimonialsError::RepositoryError(msg)
                }
            })
    }
}
