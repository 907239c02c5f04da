use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, ValidationErrorResponse};
use crate::modules::content::application::ports::incoming::use_cases::{
    GetContentCommand, GetContentError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Read a site content section
///
/// Public section read. Never cached, so an admin edit shows up on the
/// next page load. The payload shape is owned by the site frontend; the
/// server stores and returns it verbatim.
#[utoipa::path(
    get,
    path = "/api/public/content/{section}",
    tag = "public",
    params(
        ("section" = String, Path, description = "One of: hero, about, services, portfolio, contact, footer")
    ),
    responses(
        (
            status = 200,
            description = "The section document under the standard envelope, served with caching disabled"
        ),
        (
            status = 400,
            description = "Unknown section name",
            body = ValidationErrorResponse,
            example = json!({
                "success": false,
                "error": "Validation failed",
                "details": [
                    { "field": "section", "message": "must be one of: hero, about, services, portfolio, contact, footer" }
                ]
            })
        ),
        (
            status = 404,
            description = "Section has never been written",
            body = ErrorResponse,
            example = json!({ "success": false, "error": "Not found" })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": "An unexpected error occurred"
            })
        )
    )
)]
#[get("/api/public/content/{section}")]
pub async fn get_public_content_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let command = match GetContentCommand::new(path.into_inner()) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.content.get_section.execute(command).await {
        Ok(content) => ApiResponse::success_no_store(content),

        Err(GetContentError::NotFound) => ApiResponse::not_found(),

        Err(GetContentError::RepositoryError(e)) => {
            error!("Repository error reading public site content: {}", e);
            ApiResponse::internal_error()
        }
    }
}
