use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::technology::application::ports::incoming::use_cases::{
    PatchTechnologyCommand, PatchTechnologyError, PatchTechnologyUseCase,
};
use crate::modules::technology::application::ports::outgoing::{
    TechnologyRepository, TechnologyRepositoryError,
};
use crate::modules::technology::domain::entities::Technology;

pub struct PatchTechnologyService<R: TechnologyRepository> {
    repository: R,
}

impl<R: TechnologyRepository> PatchTechnologyService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: TechnologyRepository + Send + Sync> PatchTechnologyUseCase for PatchTechnologyService<R> {
    async fn execute(
        &self,
        technology_id: Uuid,
        command: PatchTechnologyCommand,
    ) -> Result<Technology, PatchTechnologyError> {
        self.repository
            .update_technology(technology_id, command.data)
            .await
            .map_err(|err| match err {
                TechnologyRepositoryError::NotFound => PatchTechnologyError::NotFound,
                TechnologyRepositoryError::DatabaseError(msg) => {
                    PatchTechnologyError::RepositoryError(msg)
                }
            })
    }
}
