use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::content::application::ports::incoming::use_cases::{
    GetContentCommand, GetContentError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/content/{section}")]
pub async fn get_content_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let command = match GetContentCommand::new(path.into_inner()) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.content.get_section.execute(command).await {
        Ok(content) => ApiResponse::success(content),

        Err(GetContentError::NotFound) => ApiResponse::not_found(),

        Err(GetContentError::RepositoryError(e)) => {
            error!("Repository error reading site content: {}", e);
            ApiResponse::internal_error()
        }
    }
}
