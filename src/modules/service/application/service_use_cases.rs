use std::sync::Arc;

use crate::modules::service::application::ports::incoming::use_cases::{
    CreateServiceUseCase, DeleteServiceUseCase, GetServicesUseCase, PatchServiceUseCase,
};

#[derive(Clone)]
pub struct ServiceUseCases {
    pub get_list: Arc<dyn GetServicesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateServiceUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchServiceUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteServiceUseCase + Send + Sync>,
}
