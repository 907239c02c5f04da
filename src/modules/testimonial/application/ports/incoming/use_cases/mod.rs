mod create_testimonial;
mod delete_testimonial;
mod get_testimonials;
mod patch_testimonial;

pub use create_testimonial::{
    CreateTestimonialCommand, CreateTestimonialError, CreateTestimonialUseCase,
};
pub use delete_testimonial::{DeleteTestimonialError, DeleteTestimonialUseCase};
pub use get_testimonials::{GetTestimonialsError, GetTestimonialsUseCase};
pub use patch_testimonial::{
    PatchTestimonialCommand, PatchTestimonialError, PatchTestimonialUseCase,
};
