use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::technology::application::ports::incoming::use_cases::{
    PatchTechnologyCommand, PatchTechnologyError,
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
pub struct UpdateTechnologyRequest {
    #[serde(default)]
    pub name: PatchField<String>,

    #[serde(default)]
    pub category: PatchField<String>,

    #[serde(default)]
    pub icon: PatchField<String>,

    #[serde(default)]
    pub expertise: PatchField<i32>,

    #[serde(default)]
    pub color: PatchField<String>,

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

#[put("/api/admin/technologies/{technology_id}")]
pub async fn update_technology_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateTechnologyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let technology_id = path.into_inner();
    let payload = payload.into_inner();

    let command = match PatchTechnologyCommand::new(
        payload.name,
        payload.category,
        payload.icon,
        payload.expertise,
        payload.color,
        payload.active,
        payload.sort_order,
    ) {
        Ok(cmd) => cmd,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data
        .technologies
        .patch
        .execute(technology_id, command)
        .await
    {
        Ok(updated) => ApiResponse::success(updated),

        Err(PatchTechnologyError::NotFound) => ApiResponse::not_found(),

        Err(PatchTechnologyError::RepositoryError(e)) => {
            error!(
                "Repository error updating technology {}: {}",
                technology_id, e
            );
            ApiResponse::internal_error()
        }
    }
}
