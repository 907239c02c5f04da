use std::sync::Arc;

use crate::modules::testimonial::application::ports::incoming::use_cases::{
    CreateTestimonialUseCase, DeleteTestimonialUseCase, GetTestimonialsUseCase,
    PatchTestimonialUseCase,
};

#[derive(Clone)]
pub struct TestimonialUseCases {
    pub get_list: Arc<dyn GetTestimonialsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTestimonialUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchTestimonialUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTestimonialUseCase + Send + Sync>,
}
