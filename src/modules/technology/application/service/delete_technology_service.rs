use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::technology::application::ports::incoming::use_cases::{
    DeleteTechnologyError, DeleteTechnologyUseCase,
};
use crate::modules::technology::application::ports::outgoing::{
    TechnologyRepository, TechnologyRepositoryError,
};

pub struct DeleteTechnologyService<R: TechnologyRepository> {
    repository: R,
}

impl<R: TechnologyRepository> DeleteTechnologyService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: TechnologyRepository + Send + Sync> DeleteTechnologyUseCase
    for DeleteTechnologyService<R>
{
    async fn execute(&self, technology_id: Uuid) -> Result<(), DeleteTechnologyError> {
        self.repository
            .delete_technology(technology_id)
            .await
            .map_err(|err| match err {
                TechnologyRepositoryError::NotFound => DeleteTechnologyError::NotFound,
                TechnologyRepositoryError::DatabaseError(msg) => {
                    DeleteTechnologyError::RepositoryError(msg)
                }
            })
    }
}
