use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Sections the admin UI and the public pages agree on. Enumerated here
/// so a typo in a path fails fast instead of writing an orphan row.
pub const CONTENT_SECTIONS: [&str; 6] =
    ["hero", "about", "services", "portfolio", "contact", "footer"];

/// One section of the public site. The document shape is a convention
/// between the admin forms and the page that renders it, not a schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub section: String,
    pub content: Value,
    pub updated_at: DateTime<Utc>,
}
