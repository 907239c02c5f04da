use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::course::domain::entities::{Course, CurriculumSection};
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct NewCourseData {
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
    pub sort_order: i32,
}

/// Field-level patch; `Unset` fields keep their stored value. Only the
/// two price columns are nullable, so `Null` reaches the repository for
/// those alone.
#[derive(Debug, Clone, Default)]
pub struct CoursePatchData {
    pub title: PatchField<String>,
    pub short_description: PatchField<String>,
    pub category: PatchField<String>,
    pub level: PatchField<String>,
    pub duration: PatchField<String>,
    pub projects: PatchField<i32>,
    pub modes: PatchField<Vec<String>>,
    pub price_online: PatchField<f64>,
    pub price_offline: PatchField<f64>,
    pub icon: PatchField<String>,
    pub gradient: PatchField<String>,
    pub curriculum: PatchField<Vec<CurriculumSection>>,
    pub tools: PatchField<Vec<String>>,
    pub features: PatchField<Vec<String>>,
    pub popular: PatchField<bool>,
    pub active: PatchField<bool>,
    pub sort_order: PatchField<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CourseRepositoryError {
    #[error("Course not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CourseRepository {
    async fn list_courses(&self, only_active: bool)
        -> Result<Vec<Course>, CourseRepositoryError>;

    async fn max_sort_order(&self) -> Result<Option<i32>, CourseRepositoryError>;

    async fn insert_course(&self, data: NewCourseData) -> Result<Course, CourseRepositoryError>;

    async fn update_course(
        &self,
        course_id: Uuid,
        data: CoursePatchData,
    ) -> Result<Course, CourseRepositoryError>;

    async fn delete_course(&self, course_id: Uuid) -> Result<(), CourseRepositoryError>;
}
