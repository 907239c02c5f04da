use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::testimonial::application::ports::incoming::use_cases::{
    PatchTestimonialCommand, PatchTestimonialError,
};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Merge-patch body: omitted fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateTestimonialRequest {
    #[serde(default)]
    pub name: PatchField<String>,

    #[serde(default)]
    pub role: PatchField<String>,

    #[serde(default)]
    pub company: PatchField<String>,

    #[serde(default)]
    pub quote: PatchField<String>,

    #[serde(default)]
    pub image: PatchField<String>,

    #[serde(default)]
    pub rating: PatchField<i32>,

    #[serde(default)]
    pub active: PatchField<bool>,

    #[serde(default, rename = "order")]
    pub sort_order: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[put("/api/admin/testimonials/{testimonial_id}")]
pub async fn update_testimonial_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateTestimonialRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let testimonial_id = path.into_inner();
    let payload = payload.into_inner();

    let command = match PatchTestimonialCommand::new(
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

    match data
        .testimonials
        .patch
        .execute(testimonial_id, command)
        .await
    {
        Ok(updated) => ApiResponse::success(updated),

        Err(PatchTestimonialError::NotFound) => ApiResponse::not_found(),

        Err(PatchTestimonialError::RepositoryError(e)) => {
            error!(
                "Repository error updating testimonial {}: {}",
                testimonial_id, e
            );
            ApiResponse::internal_error()
        }
    }
}
