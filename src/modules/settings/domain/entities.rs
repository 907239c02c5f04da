use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Setting groups the admin UI knows how to edit.
pub const SETTING_KEYS: [&str; 4] = ["general", "theme", "seo", "social"];

/// One settings group, an arbitrary JSON document like site content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSetting {
    pub key: String,
    pub value: Value,
    pub updated_at: DateTime<Utc>,
}
