use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::service::application::ports::incoming::use_cases::GetServicesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public listing: active rows only, served uncached so edits show up
/// on the next request.
#[get("/api/public/services")]
pub async fn get_public_services_handler(data: web::Data<AppState>) -> impl Responder {
    match data.services.get_list.execute(true).await {
        Ok(services) => ApiResponse::success_no_store(services),

        Err(GetServicesError::RepositoryError(e)) => {
            error!("Repository error listing public services: {}", e);
            ApiResponse::internal_error()
        }
    }
}
