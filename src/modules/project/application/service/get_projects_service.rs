use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::modules::project::domain::entities::Project;

pub struct GetProjectsService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> GetProjectsService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProjectsUseCase for GetProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, only_active: bool) -> Result<Vec<Project>, GetProjectsError> {
        self.repository
            .list_projects(only_active)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::DatabaseError(msg) => {
                    GetProjectsError::RepositoryError(msg)
                }
                ProjectRepositoryError::NotFound => {
                    GetProjectsError::RepositoryError("unexpected not-found while listing".into())
                }
            })
    }
}
