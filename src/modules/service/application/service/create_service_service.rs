use async_trait::async_trait;

use crate::modules::service::application::ports::incoming::use_cases::{
    CreateServiceCommand, CreateServiceError, CreateServiceUseCase,
};
use crate::modules::service::application::ports::outgoing::{
    NewServiceData, ServiceRepository, ServiceRepositoryError,
};
use crate::modules::service::domain::entities::Service;

pub struct CreateServiceService<R>
where
    R: ServiceRepository,
{
    repository: R,
}

impl<R> CreateServiceService<R>
where
    R: ServiceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateServiceUseCase for CreateServiceService<R>
where
    R: ServiceRepository + Send + Sync,
{
    async fn execute(&self, command: CreateServiceCommand) -> Result<Service, CreateServiceError> {
        let map_repo_err = |e: ServiceRepositoryError| match e {
            ServiceRepositoryError::DatabaseError(msg) => CreateServiceError::RepositoryError(msg),
            ServiceRepositoryError::NotFound => {
                CreateServiceError::RepositoryError("unexpected not-found while creating".into())
            }
        };

        // Read-then-insert: two concurrent creates may pick the same rank.
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
            .insert_service(NewServiceData {
                title: command.title,
                description: command.description,
                icon: command.icon,
                gradient: command.gradient,
                features: command.features,
                active: command.active,
                sort_order,
            })
            .await
            .map_err(map_repo_err)
    }
}
