pub mod api;
pub mod patch;
pub mod validation;
