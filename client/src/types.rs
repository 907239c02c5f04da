//! Wire types for the admin API: the records the server returns, the
//! create payloads, and the merge-patch payloads.
//!
//! Everything is camelCase on the wire; the display rank is `order`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Patch tri-state
// ──────────────────────────────────────────────────────────
//

/// Field of a merge-patch payload:
/// - `Unset`: leave the stored value alone (kept off the wire)
/// - `Null`: ask the server to clear a nullable column
/// - `Value(v)`: replace with `v`
///
/// Every patch struct pairs this with
/// `#[serde(skip_serializing_if = "PatchField::is_unset")]`, so an
/// omitted field and an explicit null stay distinguishable server-side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }
}

//
// ──────────────────────────────────────────────────────────
// Records
// ──────────────────────────────────────────────────────────
//

/// One service card as the admin panel and the public site see it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub gradient: String,
    pub features: Vec<String>,
    pub active: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub featured: bool,
    pub active: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
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
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub icon: String,
    pub expertise: i32,
    pub color: String,
    pub active: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One block of a course syllabus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumSection {
    pub title: String,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub short_description: String,
    pub category: String,
    pub level: String,
    pub duration: String,
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
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A contact-form submission in the admin inbox. Created by visitors,
/// never by this client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
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

/// One site content section; `content` is an arbitrary document whose
/// shape is a convention between the admin forms and the public page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub section: String,
    pub content: Value,
    pub updated_at: DateTime<Utc>,
}

/// One settings group (`general`, `theme`, `seo`, `social`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSetting {
    pub key: String,
    pub value: Value,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Create payloads
// ──────────────────────────────────────────────────────────
//

/// Omitted `order` makes the server assign `max(order) + 1`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub gradient: String,
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub quote: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTechnology {
    pub name: String,
    pub category: String,
    pub icon: String,
    pub expertise: i32,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub title: String,
    pub short_description: String,
    pub category: String,
    pub level: String,
    pub duration: String,
    pub projects: i32,
    pub modes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_online: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_offline: Option<f64>,
    pub icon: String,
    pub gradient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curriculum: Option<Vec<CurriculumSection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Patch payloads
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub icon: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub gradient: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub features: PatchField<Vec<String>>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub active: PatchField<bool>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub order: PatchField<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub image: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub category: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub technologies: PatchField<Vec<String>>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub link: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub github: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub featured: PatchField<bool>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub active: PatchField<bool>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub order: PatchField<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialPatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub name: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub role: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub company: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub quote: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub image: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub rating: PatchField<i32>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub active: PatchField<bool>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub order: PatchField<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyPatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub name: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub category: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub icon: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub expertise: PatchField<i32>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub color: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub active: PatchField<bool>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub order: PatchField<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub short_description: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub category: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub level: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub duration: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub projects: PatchField<i32>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub modes: PatchField<Vec<String>>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub price_online: PatchField<f64>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub price_offline: PatchField<f64>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub icon: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub gradient: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub curriculum: PatchField<Vec<CurriculumSection>>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub tools: PatchField<Vec<String>>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub features: PatchField<Vec<String>>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub popular: PatchField<bool>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub active: PatchField<bool>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub order: PatchField<i32>,
}

/// The read flag is the only thing an admin may change on a message.
#[derive(Debug, Clone, Serialize)]
pub struct MessagePatch {
    pub read: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_fields_stay_off_the_wire() {
        let patch = ServicePatch {
            title: PatchField::Value("Brand Systems".to_string()),
            ..ServicePatch::default()
        };

        let body = serde_json::to_value(&patch).unwrap();

        assert_eq!(body, json!({ "title": "Brand Systems" }));
    }

    #[test]
    fn explicit_null_survives_serialization() {
        let patch = ProjectPatch {
            link: PatchField::Null,
            ..ProjectPatch::default()
        };

        let body = serde_json::to_value(&patch).unwrap();

        assert_eq!(body, json!({ "link": null }));
    }

    #[test]
    fn empty_patch_serializes_to_an_empty_object() {
        let body = serde_json::to_value(CoursePatch::default()).unwrap();

        assert_eq!(body, json!({}));
    }

    #[test]
    fn records_decode_the_wire_field_names() {
        let service: Service = serde_json::from_value(json!({
            "id": "7f8f98cf-4f0b-4f2e-9f11-6a3f1d1a2b3c",
            "title": "SEO Audits",
            "description": "Full crawl and report",
            "icon": "search",
            "gradient": "from-emerald-500",
            "features": ["On-page", "Backlinks"],
            "active": true,
            "order": 3,
            "createdAt": "2026-02-01T10:00:00Z",
            "updatedAt": "2026-02-02T09:30:00Z"
        }))
        .unwrap();

        assert_eq!(service.order, 3);
        assert_eq!(service.features.len(), 2);
    }

    #[test]
    fn optional_create_fields_are_omitted_when_none() {
        let payload = NewTechnology {
            name: "Rust".to_string(),
            category: "Backend".to_string(),
            icon: "rust".to_string(),
            expertise: 85,
            color: "#ce412b".to_string(),
            active: None,
            order: None,
        };

        let body = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            body,
            json!({
                "name": "Rust",
                "category": "Backend",
                "icon": "rust",
                "expertise": 85,
                "color": "#ce412b"
            })
        );
    }
}
