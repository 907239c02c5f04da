use actix_web::{put, web, Responder};
use serde::Deserialize;
use serde_json::Value;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::settings::application::ports::incoming::use_cases::{
    UpsertSettingCommand, UpsertSettingError,
};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

// ────────────────────────────────────────────
// Request DTO
// ────────────────────────────────────────────

/// One `{key, value}` pair per request; the tri-state keeps a missing
/// `value` apart from an explicit null.
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub key: Option<String>,
    #[serde(default)]
    pub value: PatchField<Value>,
}

// ────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────

#[put("/api/admin/settings")]
pub async fn update_settings_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<UpdateSettingsRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match UpsertSettingCommand::new(payload.key, payload.value) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.settings.upsert.execute(command).await {
        Ok(setting) => ApiResponse::success(setting),

        Err(UpsertSettingError::RepositoryError(e)) => {
            error!("Repository error upserting setting: {}", e);
            ApiResponse::internal_error()
        }
    }
}
