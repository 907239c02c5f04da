use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::course::application::ports::incoming::use_cases::GetCoursesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/courses")]
pub async fn get_courses_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    // Admin sees inactive rows too.
    match data.courses.get_list.execute(false).await {
        Ok(courses) => ApiResponse::success(courses),

        Err(GetCoursesError::RepositoryError(e)) => {
            error!("Repository error listing courses: {}", e);
            ApiResponse::internal_error()
        }
    }
}
