use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::service::application::ports::incoming::use_cases::{
    CreateServiceCommand, CreateServiceError,
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
pub struct CreateServiceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub gradient: Option<String>,
    pub features: Option<Vec<String>>,
    pub active: Option<bool>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/admin/services")]
pub async fn create_service_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<CreateServiceRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateServiceCommand::new(
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

    match data.services.create.execute(command).await {
        Ok(service) => ApiResponse::created(service),

        Err(CreateServiceError::RepositoryError(e)) => {
            error!("Repository error creating service: {}", e);
            ApiResponse::internal_error()
        }
    }
}
