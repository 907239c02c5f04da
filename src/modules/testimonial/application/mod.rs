pub mod ports;
pub mod service;
mod testimonial_use_cases;

pub use testimonial_use_cases::TestimonialUseCases;
