use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One violated field from a validation failure, as the server reports
/// it in the `details` array of the response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Everything a store operation can fail with. Validation keeps the
/// per-field list so a form can mark every failing input at once.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("not found")]
    NotFound,

    #[error("server error: {0}")]
    Server(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response shape: {0}")]
    Decode(String),
}
