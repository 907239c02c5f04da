use async_trait::async_trait;

use crate::modules::content::application::ports::incoming::use_cases::{
    GetContentCommand, GetContentError, GetContentUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};
use crate::modules::content::domain::entities::SiteContent;

pub struct GetContentService<R: ContentRepository> {
    repository: R,
}

impl<R: ContentRepository> GetContentService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ContentRepository + Send + Sync> GetContentUseCase for GetContentService<R> {
    async fn execute(&self, command: GetContentCommand) -> Result<SiteContent, GetContentError> {
        self.repository
            .get_section(&command.section)
            .await
            .map_err(|err| match err {
                ContentRepositoryError::NotFound => GetContentError::NotFound,
                ContentRepositoryError::DatabaseError(msg) => {
                    GetContentError::RepositoryError(msg)
                }
            })
    }
}
