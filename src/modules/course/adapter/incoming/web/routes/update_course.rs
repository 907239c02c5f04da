use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::course::application::ports::incoming::use_cases::{
    PatchCourseCommand, PatchCourseError, PatchCourseInput,
};
use crate::modules::course::domain::entities::CurriculumSection;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

// ────────────────────────────────────────────
// Request DTO
// ────────────────────────────────────────────

/// Merge-patch body: omitted fields keep their stored value.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub short_description: PatchField<String>,
    #[serde(default)]
    pub category: PatchField<String>,
    #[serde(default)]
    pub level: PatchField<String>,
    #[serde(default)]
    pub duration: PatchField<String>,
    #[serde(default)]
    pub projects: PatchField<i32>,
    #[serde(default)]
    pub modes: PatchField<Vec<String>>,
    #[serde(default)]
    pub price_online: PatchField<f64>,
    #[serde(default)]
    pub price_offline: PatchField<f64>,
    #[serde(default)]
    pub icon: PatchField<String>,
    #[serde(default)]
    pub gradient: PatchField<String>,
    #[serde(default)]
    pub curriculum: PatchField<Vec<CurriculumSection>>,
    #[serde(default)]
    pub tools: PatchField<Vec<String>>,
    #[serde(default)]
    pub features: PatchField<Vec<String>>,
    #[serde(default)]
    pub popular: PatchField<bool>,
    #[serde(default)]
    pub active: PatchField<bool>,
    #[serde(default, rename = "order")]
    pub sort_order: PatchField<i32>,
}

// ────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────

#[put("/api/admin/courses/{course_id}")]
pub async fn update_course_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateCourseRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let payload = payload.into_inner();

    let command = match PatchCourseCommand::new(PatchCourseInput {
        title: payload.title,
        short_description: payload.short_description,
        category: payload.category,
        level: payload.level,
        duration: payload.duration,
        projects: payload.projects,
        modes: payload.modes,
        price_online: payload.price_online,
        price_offline: payload.price_offline,
        icon: payload.icon,
        gradient: payload.gradient,
        curriculum: payload.curriculum,
        tools: payload.tools,
        features: payload.features,
        popular: payload.popular,
        active: payload.active,
        sort_order: payload.sort_order,
    }) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.courses.patch.execute(id, command).await {
        Ok(course) => ApiResponse::success(course),

        Err(PatchCourseError::NotFound) => ApiResponse::not_found(),

        Err(PatchCourseError::RepositoryError(e)) => {
            error!("Repository error updating course {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
