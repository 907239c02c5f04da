use async_trait::async_trait;

use crate::modules::technology::application::ports::incoming::use_cases::{
    GetTechnologiesError, GetTechnologiesUseCase,
};
use crate::modules::technology::application::ports::outgoing::{
    TechnologyRepository, TechnologyRepositoryError,
};
use crate::modules::technology::domain::entities::Technology;

pub struct GetTechnologiesService<R: TechnologyRepository> {
    repository: R,
}

impl<R: TechnologyRepository> GetTechnologiesService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: TechnologyRepository + Send + Sync> GetTechnologiesUseCase for GetTechnologiesService<R> {
    async fn execute(&self, only_active: bool) -> Result<Vec<Technology>, GetTechnologiesError> {
        self.repository
            .list_technologies(only_active)
            .await
            .map_err(|err| match err {
                TechnologyRepositoryError::NotFound => GetTechnologiesError::RepositoryError(
                    "unexpected not-found while listing".to_string(),
                ),
                TechnologyRepositoryError::DatabaseError(msg) => {
                    GetTechnologiesError::RepositoryError(msg)
                }
            })
    }
}
