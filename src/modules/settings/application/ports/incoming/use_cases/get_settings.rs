use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSettingsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Admin settings read: the whole table as one key-to-document map, so
/// the settings form can bind each group directly.
#[async_trait]
pub trait GetSettingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<BTreeMap<String, Value>, GetSettingsError>;
}
