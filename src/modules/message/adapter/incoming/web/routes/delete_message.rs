use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::message::application::ports::incoming::use_cases::DeleteMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/messages/{message_id}")]
pub async fn delete_message_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    match data.messages.delete.execute(id).await {
        Ok(()) => ApiResponse::ok(),

        Err(DeleteMessageError::NotFound) => ApiResponse::not_found(),

        Err(DeleteMessageError::RepositoryError(e)) => {
            error!("Repository error deleting message {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
