use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Allowed values for [`Course::modes`] entries.
pub const COURSE_MODES: [&str; 3] = ["Online", "Offline", "Hybrid"];

/// One block of the course syllabus.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CurriculumSection {
    pub title: String,
    pub topics: Vec<String>,
}

/// A training course offered alongside the agency's client work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub short_description: String,
    /// Open string set, unlike Technology's fixed categories.
    pub category: String,
    pub level: String,
    pub duration: String,
    /// How many hands-on projects the course walks through.
    pub projects: i32,
    pub modes: Vec<String>,
    pub price_online: Option<f64>,
    pub price_offline: Option<f64>,
    pub icon: String,
    pub gradient: String,
    pub curriculum: Vec<CurriculumSection>,
    pub tools: Vec<String>,
    pub features: Vec<String>,
    pub popular: bool,
    pub active: bool,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
