use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::{
    PatchProjectCommand, PatchProjectError, PatchProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::modules::project::domain::entities::Project;

pub struct PatchProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> PatchProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchProjectUseCase for PatchProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        command: PatchProjectCommand,
    ) -> Result<Project, PatchProjectError> {
        self.repository
            .update_project(project_id, command.data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => PatchProjectError::NotFound,
                ProjectRepositoryError::DatabaseError(msg) => {
                    PatchProjectError::RepositoryError(msg)
                }
            })
    }
}
