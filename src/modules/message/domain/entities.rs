use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// An inbox entry from the public contact form. Unlike the catalogue
/// entities a message is never edited after submission, only its
/// `read` flag moves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
