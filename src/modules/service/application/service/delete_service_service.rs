use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::service::application::ports::incoming::use_cases::{
    DeleteServiceError, DeleteServiceUseCase,
};
use crate::modules::service::application::ports::outgoing::{
    ServiceRepository, ServiceRepositoryError,
};

pub struct DeleteServiceService<R>
where
    R: ServiceRepository,
{
    repository: R,
}

impl<R> DeleteServiceService<R>
where
    R: ServiceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteServiceUseCase for DeleteServiceService<R>
where
    R: ServiceRepository + Send + Sync,
{
    async fn execute(&self, service_id: Uuid) -> Result<(), DeleteServiceError> {
        self.repository
            .delete_service(service_id)
            .await
            .map_err(|e| match e {
                ServiceRepositoryError::NotFound => DeleteServiceError::NotFound,
                ServiceRepositoryError::DatabaseError(msg) => {
                    DeleteServiceError::RepositoryError(msg)
                }
            })
    }
}
