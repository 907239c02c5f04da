use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A client quote shown on the marketing site. `image` is an optional
/// avatar URL; `rating` is a 1 to 5 star score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub company: String,
    pub quote: String,
    pub image: Option<String>,
    pub rating: i32,
    pub active: bool,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
