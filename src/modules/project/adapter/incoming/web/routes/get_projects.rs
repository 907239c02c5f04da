use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin listing: every row, inactive included.
#[get("/api/admin/projects")]
pub async fn get_projects_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.projects.get_list.execute(false).await {
        Ok(projects) => ApiResponse::success(projects),

        Err(GetProjectsError::RepositoryError(e)) => {
            error!("Repository error listing projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}
