use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::technology::application::ports::incoming::use_cases::GetTechnologiesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public read: active rows only. Admin edits must show up on the site
/// immediately, so caching is disabled outright.
#[get("/api/public/technologies")]
pub async fn get_public_technologies_handler(data: web::Data<AppState>) -> impl Responder {
    match data.technologies.get_list.execute(true).await {
        Ok(technologies) => ApiResponse::success_no_store(technologies),

        Err(GetTechnologiesError::RepositoryError(e)) => {
            error!("Repository error listing public technologies: {}", e);
            ApiResponse::internal_error()
        }
    }
}
