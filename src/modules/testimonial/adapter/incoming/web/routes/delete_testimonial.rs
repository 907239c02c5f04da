use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::testimonial::application::ports::incoming::use_cases::DeleteTestimonialError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/testimonials/{testimonial_id}")]
pub async fn delete_testimonial_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let testimonial_id = path.into_inner();

    match data.testimonials.delete.execute(testimonial_id).await {
        Ok(()) => ApiResponse::ok(),

        Err(DeleteTestimonialError::NotFound) => ApiResponse::not_found(),

        Err(DeleteTestimonialError::RepositoryError(e)) => {
            error!(
                "Repository error deleting testimonial {}: {}",
                testimonial_id, e
            );
            ApiResponse::internal_error()
        }
    }
}
