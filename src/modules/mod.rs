pub mod auth;
pub mod content;
pub mod course;
pub mod message;
pub mod project;
pub mod service;
pub mod settings;
pub mod technology;
pub mod testimonial;
