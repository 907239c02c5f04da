use std::sync::Arc;

use crate::modules::technology::application::ports::incoming::use_cases::{
    CreateTechnologyUseCase, DeleteTechnologyUseCase, GetTechnologiesUseCase,
    PatchTechnologyUseCase,
};

#[derive(Clone)]
pub struct TechnologyUseCases {
    pub get_list: Arc<dyn GetTechnologiesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTechnologyUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchTechnologyUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTechnologyUseCase + Send + Sync>,
}
