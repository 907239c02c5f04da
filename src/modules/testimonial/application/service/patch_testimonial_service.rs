use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::testimonial::application::ports::incoming::use_cases::{
    PatchTestimonialCommand, PatchTestimonialError, PatchTestimonialUseCase,
};
use crate::modules::testimonial::application::ports::outgoing::{
    TestimonialRepository, TestimonialRepositoryError,
};
use crate::modules::testimonial::domain::entities::Testimonial;

pub struct PatchTestimonialService<R: TestimonialRepository> {
    repository: R,
}

impl<R: TestimonialRepository> PatchTestimonialService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: TestimonialRepository + Send + Sync> PatchTestimonialUseCase
    for PatchTestimonialService<R>
{
    async fn execute(
        &self,
        testimonial_id: Uuid,
        command: PatchTestimonialCommand,
    ) -> Result<Testimonial, PatchTestimonialError> {
        self.repository
            .update_testimonial(testimonial_id, command.data)
            .await
            .map_err(|err| match err {
                TestimonialRepositoryError::NotFound => PatchTestimonialError::NotFound,
                TestimonialRepositoryError::DatabaseError(msg) => {
                    PatchTestimonialError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::Utc;

    use super::*;
    use crate::modules::testimonial::application::ports::outgoing::{
        NewTestimonialData, TestimonialPatchData,
    };
    use crate::shared::patch::PatchField;

    struct MockTestimonialRepo {
        result: Result<(), TestimonialRepositoryError>,
        seen: Arc<Mutex<Option<(Uuid, TestimonialPatchData)>>>,
    }

    #[async_trait]
    impl TestimonialRepository for MockTestimonialRepo {
        async fn list_testimonials(
            &self,
            _only_active: bool,
        ) -> Result<Vec<Testimonial>, TestimonialRepositoryError> {
            unreachable!()
        }

        async fn max_sort_order(&self) -> Result<Option<i32>, TestimonialRepositoryError> {
            unreachable!()
        }

        async fn insert_testimonial(
            &self,
            _data: NewTestimonialData,
        ) -> Result<Testimonial, TestimonialRepositoryError> {
            unreachable!()
        }

        async fn update_testimonial(
            &self,
            id: Uuid,
            data: TestimonialPatchData,
        ) -> Result<Testimonial, TestimonialRepositoryError> {
            *self.seen.lock().unwrap() = Some((id, data));
            self.result.clone().map(|_| Testimonial {
                id,
                name: "Ana Costa".to_string(),
                role: "CTO".to_string(),
                company: "Meridian Labs".to_string(),
                quote: "Updated quote.".to_string(),
                image: None,
                rating: 4,
                active: true,
                sort_order: 1,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }

        async fn delete_testimonial(&self, _id: Uuid) -> Result<(), TestimonialRepositoryError> {
            unreachable!()
        }
    }

    fn rating_patch() -> PatchTestimonialCommand {
        PatchTestimonialCommand::new(
            PatchField::Unset,
            PatchField::Unset,
            PatchField::Unset,
            PatchField::Unset,
            PatchField::Null,
            PatchField::Value(4),
            PatchField::Unset,
            PatchField::Unset,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn forwards_the_id_and_patch_to_the_repository() {
        let seen = Arc::new(Mutex::new(None));
        let service = PatchTestimonialService::new(MockTestimonialRepo {
            result: Ok(()),
            seen: seen.clone(),
        });
        let id = Uuid::new_v4();

        let updated = service.execute(id, rating_patch()).await.unwrap();

        assert_eq!(updated.rating, 4);
        let (seen_id, data) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen_id, id);
        assert!(data.image.is_null());
        assert!(data.name.is_unset());
    }

    #[tokio::test]
    async fn missing_rows_surface_as_not_found() {
        let service = PatchTestimonialService::new(MockTestimonialRepo {
            result: Err(TestimonialRepositoryError::NotFound),
            seen: Arc::new(Mutex::new(None)),
        });

        let result = service.execute(Uuid::new_v4(), rating_patch()).await;

        assert!(matches!(result, Err(PatchTestimonialError::NotFound)));
    }

    #[tokio::test]
    async fn maps_database_errors() {
        let service = PatchTestimonialService::new(MockTestimonialRepo {
            result: Err(TestimonialRepositoryError::DatabaseError(
                "connection timeout".to_string(),
            )),
            seen: Arc::new(Mutex::new(None)),
        });

        let result = service.execute(Uuid::new_v4(), rating_patch()).await;

        assert!(matches!(
            result,
            Err(PatchTestimonialError::RepositoryError(msg)) if msg == "connection timeout"
        ));
    }
}
