use async_trait::async_trait;

use crate::modules::content::application::ports::incoming::use_cases::{
    UpsertContentCommand, UpsertContentError, UpsertContentUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};
use crate::modules::content::domain::entities::SiteContent;

pub struct UpsertContentService<R: ContentRepository> {
    repository: R,
}

impl<R: ContentRepository> UpsertContentService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ContentRepository + Send + Sync> UpsertContentUseCase for UpsertContentService<R> {
    async fn execute(
        &self,
        command: UpsertContentCommand,
    ) -> Result<SiteContent, UpsertContentError> {
        self.repository
            .upsert_section(command.section, command.document)
            .await
            .map_err(|err| match err {
                ContentRepositoryError::NotFound => UpsertContentError::RepositoryError(
                    "unexpected not-found while upserting".to_string(),
                ),
                ContentRepositoryError::DatabaseError(msg) => {
                    UpsertContentError::RepositoryError(msg)
                }
            })
    }
}
