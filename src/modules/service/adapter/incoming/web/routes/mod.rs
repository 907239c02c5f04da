mod create_service;
mod delete_service;
mod get_public_services;
mod get_services;
mod update_service;

pub use create_service::create_service_handler;
pub use delete_service::delete_service_handler;
pub use get_public_services::get_public_services_handler;
pub use get_services::get_services_handler;
pub use update_service::update_service_handler;
