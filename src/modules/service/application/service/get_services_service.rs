use async_trait::async_trait;

use crate::modules::service::application::ports::incoming::use_cases::{
    GetServicesError, GetServicesUseCase,
};
use crate::modules::service::application::ports::outgoing::{
    ServiceRepository, ServiceRepositoryError,
};
use crate::modules::service::domain::entities::Service;

pub struct GetServicesService<R>
where
    R: ServiceRepository,
{
    repository: R,
}

impl<R> GetServicesService<R>
where
    R: ServiceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetServicesUseCase for GetServicesService<R>
where
    R: ServiceRepository + Send + Sync,
{
    async fn execute(&self, only_active: bool) -> Result<Vec<Service>, GetServicesError> {
        self.repository
            .list_services(only_active)
            .await
            .map_err(|e| match e {
                ServiceRepositoryError::DatabaseError(msg) => {
                    GetServicesError::RepositoryError(msg)
                }
                // Listing has no missing-row path
                ServiceRepositoryError::NotFound => {
                    GetServicesError::RepositoryError("unexpected not-found while listing".into())
                }
            })
    }
}
