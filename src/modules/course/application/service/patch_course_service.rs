use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::course::application::ports::incoming::use_cases::{
    PatchCourseCommand, PatchCourseError, PatchCourseUseCase,
};
use crate::modules::course::application::ports::outgoing::{
    CourseRepository, CourseRepositoryError,
};
use crate::modules::course::domain::entities::Course;

pub struct PatchCourseService<R: CourseRepository> {
    repository: R,
}

impl<R: CourseRepository> PatchCourseService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: CourseRepository + Send + Sync> PatchCourseUseCase for PatchCourseService<R> {
    async fn execute(
        &self,
        course_id: Uuid,
        command: PatchCourseCommand,
    ) -> Result<Course, PatchCourseError> {
        self.repository
            .update_course(course_id, command.data)
            .await
            .map_err(|err| match err {
                CourseRepositoryError::NotFound => PatchCourseError::NotFound,
                CourseRepositoryError::DatabaseError(msg) => {
                    PatchCourseError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::Utc;

    use super::*;
    use crate::modules::course::application::ports::incoming::use_cases::PatchCourseInput;
    use crate::modules::course::application::ports::outgoing::{CoursePatchData, NewCourseData};
    use crate::shared::patch::PatchField;

    struct MockCourseRepo {
        result: Result<(), CourseRepositoryError>,
        seen: Arc<Mutex<Option<(Uuid, CoursePatchData)>>>,
    }

    #[async_trait]
    impl CourseRepository for MockCourseRepo {
        async fn list_courses(
            &self,
            _only_active: bool,
        ) -> Result<Vec<Course>, CourseRepositoryError> {
            unreachable!()
        }

        async fn max_sort_order(&self) -> Result<Option<i32>, CourseRepositoryError> {
            unreachable!()
        }

        async fn insert_course(
            &self,
            _data: NewCourseData,
        ) -> Result<Course, CourseRepositoryError> {
            unreachable!()
        }

        async fn update_course(
            &self,
            id: Uuid,
            data: CoursePatchData,
        ) -> Result<Course, CourseRepositoryError> {
            *self.seen.lock().unwrap() = Some((id, data));
            self.result.clone().map(|_| Course {
                id,
                title: "Full-Stack Web Development".to_string(),
                short_description: "From static pages to deployed apps".to_string(),
                category: "Web".to_string(),
                level: "Beginner".to_string(),
                duration: "12 weeks".to_string(),
                projects: 5,
                modes: vec!["Online".to_string()],
                price_online: None,
                price_offline: None,
                icon: "🎓".to_string(),
                gradient: "from-purple-500".to_string(),
                curriculum: vec![],
                tools: vec![],
                features: vec![],
                popular: false,
                active: true,
                sort_order: 1,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }

        async fn delete_course(&self, _id: Uuid) -> Result<(), CourseRepositoryError> {
            unreachable!()
        }
    }

    fn price_patch() -> PatchCourseCommand {
        PatchCourseCommand::new(PatchCourseInput {
            price_online: PatchField::Null,
            popular: PatchField::Value(true),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn forwards_the_id_and_patch_to_the_repository() {
        let seen = Arc::new(Mutex::new(None));
        let service = PatchCourseService::new(MockCourseRepo {
            result: Ok(()),
            seen: seen.clone(),
        });
        let id = Uuid::new_v4();

        service.execute(id, price_patch()).await.unwrap();

        let (seen_id, data) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen_id, id);
        assert!(data.price_online.is_null());
        assert!(matches!(data.popular, PatchField::Value(true)));
        assert!(data.title.is_unset());
    }

    #[tokio::test]
    async fn missing_rows_surface_as_not_found() {
        let service = PatchCourseService::new(MockCourseRepo {
            result: Err(CourseRepositoryError::NotFound),
            seen: Arc::new(Mutex::new(None)),
        });

        let result = service.execute(Uuid::new_v4(), price_patch()).await;

        assert!(matches!(result, Err(PatchCourseError::NotFound)));
    }

    #[tokio::test]
    async fn maps_database_errors() {
        let service = PatchCourseService::new(MockCourseRepo {
            result: Err(CourseRepositoryError::DatabaseError(
                "connection timeout".to_string(),
            )),
            seen: Arc::new(Mutex::new(None)),
        });

        let result = service.execute(Uuid::new_v4(), price_patch()).await;

        assert!(matches!(
            result,
            Err(PatchCourseError::RepositoryError(msg)) if msg == "connection timeout"
        ));
    }
}
