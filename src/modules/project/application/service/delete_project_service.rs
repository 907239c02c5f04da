use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<(), DeleteProjectError> {
        self.repository
            .delete_project(project_id)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => DeleteProjectError::NotFound,
                ProjectRepositoryError::DatabaseError(msg) => {
                    DeleteProjectError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::modules::project::application::ports::outgoing::{
        NewProjectData, ProjectPatchData,
    };
    use crate::modules::project::domain::entities::Project;

    struct MockProjectRepo {
        delete_result: Result<(), ProjectRepositoryError>,
        seen_id: Arc<Mutex<Option<Uuid>>>,
    }

    #[async_trait]
    impl ProjectRepository for MockProjectRepo {
        async fn list_projects(
            &self,
            _only_active: bool,
        ) -> Result<Vec<Project>, ProjectRepositoryError> {
            unimplemented!("not needed for delete tests")
        }

        async fn max_sort_order(&self) -> Result<Option<i32>, ProjectRepositoryError> {
            unimplemented!("not needed for delete tests")
        }

        async fn insert_project(
            &self,
            _data: NewProjectData,
        ) -> Result<Project, ProjectRepositoryError> {
            unimplemented!("not needed for delete tests")
        }

        async fn update_project(
            &self,
            _project_id: Uuid,
            _data: ProjectPatchData,
        ) -> Result<Project, ProjectRepositoryError> {
            unimplemented!("not needed for delete tests")
        }

        async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError> {
            *self.seen_id.lock().unwrap() = Some(project_id);
            self.delete_result.clone()
        }
    }

    #[tokio::test]
    async fn deletes_by_id() {
        let seen = Arc::new(Mutex::new(None));
        let repo = MockProjectRepo {
            delete_result: Ok(()),
            seen_id: Arc::clone(&seen),
        };
        let id = Uuid::new_v4();

        let result = DeleteProjectService::new(repo).execute(id).await;

        assert!(result.is_ok());
        assert_eq!(*seen.lock().unwrap(), Some(id));
    }

    #[tokio::test]
    async fn missing_rows_surface_as_not_found() {
        let repo = MockProjectRepo {
            delete_result: Err(ProjectRepositoryError::NotFound),
            seen_id: Arc::new(Mutex::new(None)),
        };

        let result = DeleteProjectService::new(repo).execute(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), DeleteProjectError::NotFound));
    }
}
