use async_trait::async_trait;

use crate::modules::technology::application::ports::incoming::use_cases::{
    CreateTechnologyCommand, CreateTechnologyError, CreateTechnologyUseCase,
};
use crate::modules::technology::application::ports::outgoing::{
    NewTechnologyData, TechnologyRepository, TechnologyRepositoryError,
};
use crate::modules::technology::domain::entities::Technology;

pub struct CreateTechnologyService<R: TechnologyRepository> {
    repository: R,
}

impl<R: TechnologyRepository> CreateTechnologyService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: TechnologyRepository + Send + Sync> CreateTechnologyUseCase
    for CreateTechnologyService<R>
{
    async fn execute(
        &self,
        command: CreateTechnologyCommand,
    ) -> Result<Technology, CreateTechnologyError> {
        let map_repo_err = |err: TechnologyRepositoryError| match err {
            TechnologyRepositoryError::NotFound => CreateTechnologyError::RepositoryError(
                "unexpected not-found while creating".to_string(),
            ),
            TechnologyRepositoryError::DatabaseError(msg) => {
                CreateTechnologyError::RepositoryError(msg)
            }
        };

        let sort_order = match command.sort_order {
            Some(value) => value,
            None => self
                .repository
                .max_sort_order()
                .await
                .map_err(map_repo_err)?
                .map_or(1, |max| max + 1),
        };

        self.repository
            .insert_technology(NewTechnologyData {
                name: command.name,
                category: command.category,
                icon: command.icon,
                expertise: command.expertise,
                color: command.color,
                active: command.active,
                sort_order,
            })
            .await
            .map_err(map_repo_err)
    }
}
