// src/shared/api/response.rs
use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use serde::Serialize;

/// One field that failed command validation, with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::wrap(data))
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(Self::wrap(data))
    }

    /// 200 with caching disabled. Public reads use this so that an admin
    /// edit is visible on the very next request.
    pub fn success_no_store(data: T) -> HttpResponse {
        HttpResponse::Ok()
            .insert_header((
                header::CACHE_CONTROL,
                "no-store, no-cache, must-revalidate",
            ))
            .insert_header((header::PRAGMA, "no-cache"))
            .json(Self::wrap(data))
    }

    fn wrap(data: T) -> ApiResponse<T> {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
            details: None,
        }
    }
}

impl ApiResponse<()> {
    /// Bare `{"success": true}` acknowledgment, used by deletes.
    pub fn ok() -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            success: true,
            data: None,
            error: None,
            details: None,
        })
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(message.to_string()),
            details: None,
        })
    }

    /// 400 carrying the complete list of violated fields.
    pub fn validation_failed(details: Vec<FieldError>) -> HttpResponse {
        HttpResponse::BadRequest().json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some("Validation failed".to_string()),
            details: Some(details),
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized() -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, "Unauthorized")
    }

    pub fn not_found() -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, "Not found")
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred")
    }
}
