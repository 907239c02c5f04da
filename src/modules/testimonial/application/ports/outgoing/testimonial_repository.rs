// src/modules/testimonial/application/ports/outgoing/testimonial_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::testimonial::domain::entities::Testimonial;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct NewTestimonialData {
    pub name: String,
    pub role: String,
    pub company: String,
    pub quote: String,
    pub image: Option<String>,
    pub rating: i32,
    pub active: bool,
    pub sort_order: i32,
}

/// Merge semantics: Unset keeps the stored column; `image` is the only
/// nullable field, so Null clears it.
#[derive(Debug, Clone, Default)]
pub struct TestimonialPatchData {
    pub name: PatchField<String>,
    pub role: PatchField<String>,
    pub company: PatchField<String>,
    pub quote: PatchField<String>,
    pub image: PatchField<String>,
    pub rating: PatchField<i32>,
    pub active: PatchField<bool>,
    pub sort_order: PatchField<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TestimonialRepositoryError {
    #[error("Testimonial not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn list_testimonials(
        &self,
        only_active: bool,
    ) -> Result<Vec<Testimonial>, TestimonialRepositoryError>;

    async fn max_sort_order(&self) -> Result<Option<i32>, TestimonialRepositoryError>;

    async fn insert_testimonial(
        &self,
        data: NewTestimonialData,
    ) -> Result<Testimonial, TestimonialRepositoryError>;

    async fn update_testimonial(
        &self,
        testimonial_id: Uuid,
        data: TestimonialPatchData,
    ) -> Result<Testimonial, TestimonialRepositoryError>;

    async fn delete_testimonial(
        &self,
        testimonial_id: Uuid,
    ) -> Result<(), TestimonialRepositoryError>;
}
