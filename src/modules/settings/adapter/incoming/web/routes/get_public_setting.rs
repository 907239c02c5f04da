use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::settings::application::ports::incoming::use_cases::{
    GetSettingCommand, GetSettingError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public single-group read, for the pages that need theme or social
/// settings without a session. Never cached.
#[get("/api/public/settings/{key}")]
pub async fn get_public_setting_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let command = match GetSettingCommand::new(path.into_inner()) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.settings.get_one.execute(command).await {
        Ok(setting) => ApiResponse::success_no_store(setting),

        Err(GetSettingError::NotFound) => ApiResponse::not_found(),

        Err(GetSettingError::RepositoryError(e)) => {
            error!("Repository error reading public setting: {}", e);
            ApiResponse::internal_error()
        }
    }
}
