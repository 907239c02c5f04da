use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, ValidationErrorResponse};
use crate::modules::message::application::ports::incoming::use_cases::{
    SubmitMessageCommand, SubmitMessageError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

// ────────────────────────────────────────────
// Request DTO
// ────────────────────────────────────────────

/// Every field optional so missing values land in the per-field error
/// list instead of failing deserialization.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitMessageRequest {
    /// Sender name (at least 2 characters)
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,

    /// Reply-to address
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,

    /// Subject line (at least 5 characters)
    #[schema(example = "Project inquiry")]
    pub subject: Option<String>,

    /// Message body (at least 10 characters)
    #[schema(example = "We would like a quote for a new storefront.")]
    pub message: Option<String>,
}

// ────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────

/// Submit a contact message
///
/// The one unauthenticated mutation: the public contact form. Stores the
/// message unread in the admin inbox. All four fields are checked in one
/// pass and every violation is reported.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "public",
    request_body = SubmitMessageRequest,
    responses(
        (
            status = 201,
            description = "Message stored, returned under the standard envelope"
        ),
        (
            status = 400,
            description = "One or more fields failed validation",
            body = ValidationErrorResponse,
            example = json!({
                "success": false,
                "error": "Validation failed",
                "details": [
                    { "field": "email", "message": "must be a valid email address" }
                ]
            })
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
#[post("/api/contact")]
pub async fn submit_message_handler(
    data: web::Data<AppState>,
    payload: web::Json<SubmitMessageRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match SubmitMessageCommand::new(
        payload.name,
        payload.email,
        payload.subject,
        payload.message,
    ) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.messages.submit.execute(command).await {
        Ok(message) => ApiResponse::created(message),

        Err(SubmitMessageError::RepositoryError(e)) => {
            error!("Repository error storing contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}
