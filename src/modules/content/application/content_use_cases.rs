use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    GetContentUseCase, UpsertContentUseCase,
};

#[derive(Clone)]
pub struct ContentUseCases {
    pub get_section: Arc<dyn GetContentUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertContentUseCase + Send + Sync>,
}
