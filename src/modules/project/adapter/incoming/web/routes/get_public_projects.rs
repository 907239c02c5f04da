use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public listing: active rows only, uncached.
#[get("/api/public/projects")]
pub async fn get_public_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.projects.get_list.execute(true).await {
        Ok(projects) => ApiResponse::success_no_store(projects),

        Err(GetProjectsError::RepositoryError(e)) => {
            error!("Repository error listing public projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}
