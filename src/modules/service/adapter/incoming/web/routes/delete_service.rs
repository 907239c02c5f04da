use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::service::application::ports::incoming::use_cases::DeleteServiceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/services/{service_id}")]
pub async fn delete_service_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let service_id = path.into_inner();

    match data.services.delete.execute(service_id).await {
        Ok(()) => ApiResponse::ok(),

        Err(DeleteServiceError::NotFound) => ApiResponse::not_found(),

        Err(DeleteServiceError::RepositoryError(e)) => {
            error!("Repository error deleting service {}: {}", service_id, e);
            ApiResponse::internal_error()
        }
    }
}
