use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Allowed values for [`Technology::category`].
pub const TECHNOLOGY_CATEGORIES: [&str; 5] =
    ["Frontend", "Backend", "Database", "Cloud", "Mobile"];

/// One entry of the skill matrix on the public site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    /// Emoji or symbolic icon name rendered by the frontend.
    pub icon: String,
    /// Self-assessed proficiency, 0 to 100.
    pub expertise: i32,
    /// Hex color like `#61dafb` used for the expertise bar.
    pub color: String,
    pub active: bool,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
