use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One service card as rendered on the marketing site and edited in the
/// admin panel. `sort_order` is the display rank; duplicates are allowed
/// and readers sort ascending with creation time as the tiebreaker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Icon identifier understood by the admin UI icon set.
    pub icon: String,
    /// Gradient token the frontend maps to its card styles.
    pub gradient: String,
    pub features: Vec<String>,
    pub active: bool,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
