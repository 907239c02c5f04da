use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::message::application::ports::incoming::use_cases::{
    SetMessageReadCommand, SetMessageReadError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

// ────────────────────────────────────────────
// Request DTO
// ────────────────────────────────────────────

/// The only mutable column is the read flag.
#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub read: Option<bool>,
}

// ────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────

#[put("/api/admin/messages/{message_id}")]
pub async fn update_message_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateMessageRequest>,
) -> impl Responder {
    let id = path.into_inner();

    let command = match SetMessageReadCommand::new(payload.into_inner().read) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.messages.set_read.execute(id, command).await {
        Ok(message) => ApiResponse::success(message),

        Err(SetMessageReadError::NotFound) => ApiResponse::not_found(),

        Err(SetMessageReadError::RepositoryError(e)) => {
            error!("Repository error updating message {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
