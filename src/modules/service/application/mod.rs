pub mod ports;
pub mod service;
mod service_use_cases;

pub use service_use_cases::ServiceUseCases;
