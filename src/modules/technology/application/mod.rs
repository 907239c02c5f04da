pub mod ports;
pub mod service;
mod technology_use_cases;

pub use technology_use_cases::TechnologyUseCases;
