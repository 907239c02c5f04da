use async_trait::async_trait;
use serde_json::Value;

use crate::modules::content::domain::entities::SiteContent;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Section not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Keyed singleton store: sections are written by upsert only, never
/// created or deleted through their own endpoints.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// `NotFound` means the section has never been written.
    async fn get_section(&self, section: &str) -> Result<SiteContent, ContentRepositoryError>;

    async fn upsert_section(
        &self,
        section: String,
        document: Value,
    ) -> Result<SiteContent, ContentRepositoryError>;
}
