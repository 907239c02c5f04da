use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::course::application::ports::incoming::use_cases::DeleteCourseError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/courses/{course_id}")]
pub async fn delete_course_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    match data.courses.delete.execute(id).await {
        Ok(()) => ApiResponse::ok(),

        Err(DeleteCourseError::NotFound) => ApiResponse::not_found(),

        Err(DeleteCourseError::RepositoryError(e)) => {
            error!("Repository error deleting course {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
