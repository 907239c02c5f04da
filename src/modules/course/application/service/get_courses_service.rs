use async_trait::async_trait;

use crate::modules::course::application::ports::incoming::use_cases::{
    GetCoursesError, GetCoursesUseCase,
};
use crate::modules::course::application::ports::outgoing::{
    CourseRepository, CourseRepositoryError,
};
use crate::modules::course::domain::entities::Course;

pub struct GetCoursesService<R: CourseRepository> {
    repository: R,
}

impl<R: CourseRepository> GetCoursesService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: CourseRepository + Send + Sync> GetCoursesUseCase for GetCoursesService<R> {
    async fn execute(&self, only_active: bool) -> Result<Vec<Course>, GetCoursesError> {
        self.repository
            .list_courses(only_active)
            .await
            .map_err(|err| match err {
                CourseRepositoryError::NotFound => GetCoursesError::RepositoryError(
                    "unexpected not-found while listing".to_string(),
                ),
                CourseRepositoryError::DatabaseError(msg) => {
                    GetCoursesError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::modules::course::application::ports::outgoing::{CoursePatchData, NewCourseData};

    struct MockCourseRepo {
        courses: Vec<Course>,
        seen_only_active: Arc<Mutex<Option<bool>>>,
        fail: bool,
    }

    #[async_trait]
    impl CourseRepository for MockCourseRepo {
        async fn list_courses(
            &self,
            only_active: bool,
        ) -> Result<Vec<Course>, CourseRepositoryError> {
            *self.seen_only_active.lock().unwrap() = Some(only_active);
            if self.fail {
                return Err(CourseRepositoryError::DatabaseError(
                    "connection timeout".to_string(),
                ));
            }
            Ok(self.courses.clone())
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
            _id: Uuid,
            _data: CoursePatchData,
        ) -> Result<Course, CourseRepositoryError> {
            unreachable!()
        }

        async fn delete_course(&self, _id: Uuid) -> Result<(), CourseRepositoryError> {
            unreachable!()
        }
    }

    fn sample_course() -> Course {
        Course {
            id: Uuid::new_v4(),
            title: "Full-Stack Web Development".to_string(),
            short_description: "From static pages to deployed apps".to_string(),
            category: "Web".to_string(),
            level: "Beginner".to_string(),
            duration: "12 weeks".to_string(),
            projects: 5,
            modes: vec!["Online".to_string()],
            price_online: Some(499.0),
            price_offline: None,
            icon: "🎓".to_string(),
            gradient: "from-purple-500".to_string(),
            curriculum: vec![],
            tools: vec!["VS Code".to_string()],
            features: vec!["Certificate".to_string()],
            popular: true,
            active: true,
            sort_order: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn passes_the_active_filter_through() {
        let seen = Arc::new(Mutex::new(None));
        let service = GetCoursesService::new(MockCourseRepo {
            courses: vec![sample_course()],
            seen_only_active: seen.clone(),
            fail: false,
        });

        let result = service.execute(true).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(*seen.lock().unwrap(), Some(true));
    }

    #[tokio::test]
    async fn maps_database_errors() {
        let service = GetCoursesService::new(MockCourseRepo {
            courses: vec![],
            seen_only_active: Arc::new(Mutex::new(None)),
            fail: true,
        });

        let result = service.execute(false).await;

        assert!(matches!(
            result,
            Err(GetCoursesError::RepositoryError(msg)) if msg == "connection timeout"
        ));
    }
}
