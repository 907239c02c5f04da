mod testimonial_repository;

pub use testimonial_repository::{
    NewTestimonialData, TestimonialPatchData, TestimonialRepository, TestimonialRepositoryError,
};
