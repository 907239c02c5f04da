use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::service::application::ports::incoming::use_cases::{
    PatchServiceCommand, PatchServiceError,
};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Merge-patch body: omitted fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateServiceRequest {
    #[serde(default)]
    pub title: PatchField<String>,

    #[serde(default)]
    pub description: PatchField<String>,

    #[serde(default)]
    pub icon: PatchField<String>,

    #[serde(default)]
    pub gradient: PatchField<String>,

    #[serde(default)]
    pub features: PatchField<Vec<String>>,

    #[serde(default)]
    pub active: PatchField<bool>,

    #[serde(default, rename = "order")]
    pub sort_order: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[put("/api/admin/services/{service_id}")]
pub async fn update_service_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateServiceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let service_id = path.into_inner();
    let payload = payload.into_inner();

    let command = match PatchServiceCommand::new(
        payload.title,
        payload.description,
        payload.icon,
        payload.gradient,
        payload.features,
        payload.active,
        payload.sort_order,
    ) {
        Ok(cmd) => cmd,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.services.patch.execute(service_id, command).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(PatchServiceError::NotFound) => ApiResponse::not_found(),

        Err(PatchServiceError::RepositoryError(e)) => {
            error!("Repository error updating service {}: {}", service_id, e);
            ApiResponse::internal_error()
        }
    }
}
