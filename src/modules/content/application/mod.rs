pub mod ports;
pub mod service;
mod content_use_cases;

pub use content_use_cases::ContentUseCases;
