use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::technology::domain::entities::Technology;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct NewTechnologyData {
    pub name: String,
    pub category: String,
    pub icon: String,
    pub expertise: i32,
    pub color: String,
    pub active: bool,
    pub sort_order: i32,
}

/// Field-level patch; `Unset` fields keep their stored value. No column
/// here is nullable, so `Null` never reaches the repository.
#[derive(Debug, Clone, Default)]
pub struct TechnologyPatchData {
    pub name: PatchField<String>,
    pub category: PatchField<String>,
    pub icon: PatchField<String>,
    pub expertise: PatchField<i32>,
    pub color: PatchField<String>,
    pub active: PatchField<bool>,
    pub sort_order: PatchField<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TechnologyRepositoryError {
    #[error("Technology not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TechnologyRepository {
    async fn list_technologies(
        &self,
        only_active: bool,
    ) -> Result<Vec<Technology>, TechnologyRepositoryError>;

    async fn max_sort_order(&self) -> Result<Option<i32>, TechnologyRepositoryError>;

    async fn insert_technology(
        &self,
        data: NewTechnologyData,
    ) -> Result<Technology, TechnologyRepositoryError>;

    async fn update_technology(
        &self,
        technology_id: Uuid,
        data: TechnologyPatchData,
    ) -> Result<Technology, TechnologyRepositoryError>;

    async fn delete_technology(
        &self,
        technology_id: Uuid,
    ) -> Result<(), TechnologyRepositoryError>;
}
