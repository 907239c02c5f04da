// src/modules/service/application/ports/outgoing/service_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::service::domain::entities::Service;
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Insert payload. `sort_order` is already resolved by the use case
/// (either client-provided or max + 1).
#[derive(Debug, Clone)]
pub struct NewServiceData {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub gradient: String,
    pub features: Vec<String>,
    pub active: bool,
    pub sort_order: i32,
}

/// Merge semantics: Unset keeps the stored column. No column of this
/// resource is nullable, so commands reject explicit nulls before the
/// data reaches the adapter.
#[derive(Debug, Clone, Default)]
pub struct ServicePatchData {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub icon: PatchField<String>,
    pub gradient: PatchField<String>,
    pub features: PatchField<Vec<String>>,
    pub active: PatchField<bool>,
    pub sort_order: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceRepositoryError {
    #[error("Service not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Ascending by sort rank, creation time as tiebreaker. `only_active`
    /// is the public-read filter; admin reads pass false.
    async fn list_services(&self, only_active: bool)
        -> Result<Vec<Service>, ServiceRepositoryError>;

    /// Highest sort rank currently stored; None when the table is empty.
    async fn max_sort_order(&self) -> Result<Option<i32>, ServiceRepositoryError>;

    async fn insert_service(&self, data: NewServiceData)
        -> Result<Service, ServiceRepositoryError>;

    /// Single-statement merge update writing only the provided fields.
    async fn update_service(
        &self,
        service_id: Uuid,
        data: ServicePatchData,
    ) -> Result<Service, ServiceRepositoryError>;

    async fn delete_service(&self, service_id: Uuid) -> Result<(), ServiceRepositoryError>;
}
