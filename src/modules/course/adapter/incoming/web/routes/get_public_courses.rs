use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::course::application::ports::incoming::use_cases::GetCoursesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public catalogue: active courses only, never cached.
#[get("/api/public/courses")]
pub async fn get_public_courses_handler(data: web::Data<AppState>) -> impl Responder {
    match data.courses.get_list.execute(true).await {
        Ok(courses) => ApiResponse::success_no_store(courses),

        Err(GetCoursesError::RepositoryError(e)) => {
            error!("Repository error listing public courses: {}", e);
            ApiResponse::internal_error()
        }
    }
}
