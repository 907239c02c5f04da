pub mod ports;
pub mod service;
mod course_use_cases;

pub use course_use_cases::CourseUseCases;
