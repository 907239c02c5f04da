use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    NewProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::project::domain::entities::Project;

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, command: CreateProjectCommand) -> Result<Project, CreateProjectError> {
        let map_repo_err = |e: ProjectRepositoryError| match e {
            ProjectRepositoryError::DatabaseError(msg) => CreateProjectError::RepositoryError(msg),
            ProjectRepositoryError::NotFound => {
                CreateProjectError::RepositoryError("unexpected not-found while creating".into())
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
            .insert_project(NewProjectData {
                title: command.title,
                description: command.description,
                image: command.image,
                category: command.category,
                technologies: command.technologies,
                link: command.link,
                github: command.github,
                featured: command.featured,
                active: command.active,
                sort_order,
            })
            .await
            .map_err(map_repo_err)
    }
}
