use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::service::application::ports::incoming::use_cases::GetServicesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin listing: every row, inactive included.
#[get("/api/admin/services")]
pub async fn get_services_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.services.get_list.execute(false).await {
        Ok(services) => ApiResponse::success(services),

        Err(GetServicesError::RepositoryError(e)) => {
            error!("Repository error listing services: {}", e);
            ApiResponse::internal_error()
        }
    }
}
