use async_trait::async_trait;

use crate::modules::testimonial::application::ports::incoming::use_cases::{
    CreateTestimonialCommand, CreateTestimonialError, CreateTestimonialUseCase,
};
use crate::modules::testimonial::application::ports::outgoing::{
    NewTestimonialData, TestimonialRepository, TestimonialRepositoryError,
};
use crate::modules::testimonial::domain::entities::Testimonial;

pub struct CreateTestimonialService<R: TestimonialRepository> {
    repository: R,
}

impl<R: TestimonialRepository> CreateTestimonialService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: TestimonialRepository + Send + Sync> CreateTestimonialUseCase
    for CreateTestimonialService<R>
{
    async fn execute(
        &self,
        command: CreateTestimonialCommand,
    ) -> Result<Testimonial, CreateTestimonialError> {
        let map_repo_err = |err: TestimonialRepositoryError| match err {
            TestimonialRepositoryError::NotFound => CreateTestimonialError::RepositoryError(
                "unexpected not-found while creating".to_string(),
            ),
            TestimonialRepositoryError::DatabaseError(msg) => {
                CreateTestimonialError::RepositoryError(msg)
            }
        };

        let sort_order = match command.sort_order {
            Some(value) => value,
            None => self
                .repository
                .max_sort_order()
                .await
                .map_err(map_repo_err)?
                .map_or(1, |max| max + 1),
        };

        self.repository
            .insert_testimonial(NewTestimonialData {
                name: command.name,
                role: command.role,
                company: command.company,
                quote: command.quote,
                image: command.image,
                rating: command.rating,
                active: command.active,
                sort_order,
            })
            .await
            .map_err(map_repo_err)
    }
}
