use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::project::application::ports::incoming::use_cases::{
    PatchProjectCommand, PatchProjectError,
};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Merge-patch body: omitted fields keep their stored value; `link` and
/// `github` accept explicit null to clear the column.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub title: PatchField<String>,

    #[serde(default)]
    pub description: PatchField<String>,

    #[serde(default)]
    pub image: PatchField<String>,

    #[serde(default)]
    pub category: PatchField<String>,

    #[serde(default)]
    pub technologies: PatchField<Vec<String>>,

    #[serde(default)]
    pub link: PatchField<String>,

    #[serde(default)]
    pub github: PatchField<String>,

    #[serde(default)]
    pub featured: PatchField<bool>,

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

#[put("/api/admin/projects/{project_id}")]
pub async fn update_project_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();
    let payload = payload.into_inner();

    let command = match PatchProjectCommand::new(
        payload.title,
        payload.description,
        payload.image,
        payload.category,
        payload.technologies,
        payload.link,
        payload.github,
        payload.featured,
        payload.active,
        payload.sort_order,
    ) {
        Ok(cmd) => cmd,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.projects.patch.execute(project_id, command).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(PatchProjectError::NotFound) => ApiResponse::not_found(),

        Err(PatchProjectError::RepositoryError(e)) => {
            error!("Repository error updating project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
