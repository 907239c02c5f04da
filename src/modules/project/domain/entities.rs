use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One portfolio entry. `link` and `github` are the only nullable fields
/// in the catalog; `null` on the wire means "no such link".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Cover image URL.
    pub image: String,
    /// Free-form grouping label; the admin UI offers suggestions but any
    /// non-blank string is accepted.
    pub category: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub featured: bool,
    pub active: bool,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
