mod create_testimonial_service;
mod delete_testimonial_service;
mod get_testimonials_service;
mod patch_testimonial_service;

pub use create_testimonial_service::CreateTestimonialService;
pub use delete_testimonial_service::DeleteTestimonialService;
pub use get_testimonials_service::GetTestimonialsService;
pub use patch_testimonial_service::PatchTestimonialService;
