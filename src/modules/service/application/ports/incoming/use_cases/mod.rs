mod create_service;
mod delete_service;
mod get_services;
mod patch_service;

pub use create_service::{CreateServiceCommand, CreateServiceError, CreateServiceUseCase};
pub use delete_service::{DeleteServiceError, DeleteServiceUseCase};
pub use get_services::{GetServicesError, GetServicesUseCase};
pub use patch_service::{PatchServiceCommand, PatchServiceError, PatchServiceUseCase};
