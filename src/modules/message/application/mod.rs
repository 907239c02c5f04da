pub mod ports;
pub mod service;
mod message_use_cases;

pub use message_use_cases::MessageUseCases;
