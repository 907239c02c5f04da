use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::settings::application::ports::incoming::use_cases::GetSettingsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/settings")]
pub async fn get_settings_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.settings.get_all.execute().await {
        Ok(settings) => ApiResponse::success(settings),

        Err(GetSettingsError::RepositoryError(e)) => {
            error!("Repository error listing settings: {}", e);
            ApiResponse::internal_error()
        }
    }
}
