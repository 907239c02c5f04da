use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/admin/projects")]
pub async fn create_project_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<CreateProjectRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateProjectCommand::new(
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

    match data.projects.create.execute(command).await {
        Ok(project) => ApiResponse::created(project),

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
