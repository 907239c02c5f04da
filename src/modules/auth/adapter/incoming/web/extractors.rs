use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use tracing::error;

use crate::auth::application::ports::outgoing::SessionGate;
use crate::auth::domain::entities::Principal;
use crate::shared::api::ApiResponse;

/// Extractor guarding the admin endpoints. Resolves the bearer token to a
/// live session, or short-circuits with the envelope-shaped 401.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub principal: Principal,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let gate = req
            .app_data::<web::Data<Arc<dyn SessionGate>>>()
            .map(|data| Arc::clone(data.get_ref()));
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let gate = match gate {
                Some(gate) => gate,
                None => return Err(create_api_error(ApiResponse::internal_error())),
            };

            let token = match token {
                Some(token) => token,
                None => return Err(create_api_error(ApiResponse::unauthorized())),
            };

            match gate.authorize(&token).await {
                Ok(Some(principal)) => Ok(AdminSession { principal }),
                Ok(None) => Err(create_api_error(ApiResponse::unauthorized())),
                Err(e) => {
                    error!("Session lookup failed: {}", e);
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
