use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::technology::application::ports::incoming::use_cases::{
    CreateTechnologyCommand, CreateTechnologyError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Every field optional so missing values land in the per-field error
/// list instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateTechnologyRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub expertise: Option<i32>,
    pub color: Option<String>,
    pub active: Option<bool>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/admin/technologies")]
pub async fn create_technology_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<CreateTechnologyRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateTechnologyCommand::new(
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

    match data.technologies.create.execute(command).await {
        Ok(technology) => ApiResponse::created(technology),

        Err(CreateTechnologyError::RepositoryError(e)) => {
            error!("Repository error creating technology: {}", e);
            ApiResponse::internal_error()
        }
    }
}
