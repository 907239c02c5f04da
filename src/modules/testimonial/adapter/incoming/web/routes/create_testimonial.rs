use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::testimonial::application::ports::incoming::use_cases::{
    CreateTestimonialCommand, CreateTestimonialError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Every field optional so missing values land in the per-field error
/// list instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateTestimonialRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub quote: Option<String>,
    pub image: Option<String>,
    pub rating: Option<i32>,
    pub active: Option<bool>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/admin/testimonials")]
pub async fn create_testimonial_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<CreateTestimonialRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateTestimonialCommand::new(
        payload.name,
        payload.role,
        payload.company,
        payload.quote,
        payload.image,
        payload.rating,
        payload.active,
        payload.sort_order,
    ) {
        Ok(cmd) => cmd,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.testimonials.create.execute(command).await {
        Ok(testimonial) => ApiResponse::created(testimonial),

        Err(CreateTestimonialError::RepositoryError(e)) => {
            error!("Repository error creating testimonial: {}", e);
            ApiResponse::internal_error()
        }
    }
}
