use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/projects/{project_id}")]
pub async fn delete_project_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.projects.delete.execute(project_id).await {
        Ok(()) => ApiResponse::ok(),

        Err(DeleteProjectError::NotFound) => ApiResponse::not_found(),

        Err(DeleteProjectError::RepositoryError(e)) => {
            error!("Repository error deleting project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
