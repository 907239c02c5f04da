use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::message::application::ports::incoming::use_cases::GetMessagesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/messages")]
pub async fn get_messages_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.messages.get_list.execute().await {
        Ok(messages) => ApiResponse::success(messages),

        Err(GetMessagesError::RepositoryError(e)) => {
            error!("Repository error listing messages: {}", e);
            ApiResponse::internal_error()
        }
    }
}
