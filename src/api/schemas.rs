// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard error envelope
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,

    /// Human-readable error message
    #[schema(example = "Not found")]
    pub error: String,
}

/// Validation failure envelope, carrying every violated field at once
#[derive(Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,

    /// Always "Validation failed"
    #[schema(example = "Validation failed")]
    pub error: String,

    /// One entry per violated field
    pub details: Vec<FieldErrorSchema>,
}

#[derive(Serialize, ToSchema)]
pub struct FieldErrorSchema {
    /// Wire name of the violated field
    #[schema(example = "email")]
    pub field: String,

    /// Human-readable reason
    #[schema(example = "must be a valid email address")]
    pub message: String,
}
