mod create_testimonial;
mod delete_testimonial;
mod get_public_testimonials;
mod get_testimonials;
mod update_testimonial;

pub use create_testimonial::create_testimonial_handler;
pub use delete_testimonial::delete_testimonial_handler;
pub use get_public_testimonials::get_public_testimonials_handler;
pub use get_testimonials::get_testimonials_handler;
pub use update_testimonial::update_testimonial_handler;
