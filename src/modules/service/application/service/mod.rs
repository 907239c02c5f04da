mod create_service_service;
mod delete_service_service;
mod get_services_service;
mod patch_service_service;

pub use create_service_service::CreateServiceService;
pub use delete_service_service::DeleteServiceService;
pub use get_services_service::GetServicesService;
pub use patch_service_service::PatchServiceService;
