use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::technology::application::ports::incoming::use_cases::GetTechnologiesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/technologies")]
pub async fn get_technologies_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    // Admin sees inactive rows too.
    match data.technologies.get_list.execute(false).await {
        Ok(technologies) => ApiResponse::success(technologies),

        Err(GetTechnologiesError::RepositoryError(e)) => {
            error!("Repository error listing technologies: {}", e);
            ApiResponse::internal_error()
        }
    }
}
