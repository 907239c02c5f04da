use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::course::application::ports::incoming::use_cases::{
    DeleteCourseError, DeleteCourseUseCase,
};
use crate::modules::course::application::ports::outgoing::{
    CourseRepository, CourseRepositoryError,
};

pub struct DeleteCourseService<R: CourseRepository> {
    repository: R,
}

impl<R: CourseRepository> DeleteCourseService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: CourseRepository + Send + Sync> DeleteCourseUseCase for DeleteCourseService<R> {
    async fn execute(&self, course_id: Uuid) -> Result<(), DeleteCourseError> {
        self.repository
            .delete_course(course_id)
            .await
            .map_err(|err| match err {
                CourseRepositoryError::NotFound => DeleteCourseError::NotFound,
                CourseRepositoryError::DatabaseError(msg) => {
                    DeleteCourseError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::modules::course::application::ports::outgoing::{CoursePatchData, NewCourseData};
    use crate::modules::course::domain::entities::Course;

    struct MockCourseRepo {
        result: Result<(), CourseRepositoryError>,
        seen: Arc<Mutex<Option<Uuid>>>,
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
            _id: Uuid,
            _data: CoursePatchData,
        ) -> Result<Course, CourseRepositoryError> {
            unreachable!()
        }

        async fn delete_course(&self, id: Uuid) -> Result<(), CourseRepositoryError> {
            *self.seen.lock().unwrap() = Some(id);
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn deletes_by_id() {
        let seen = Arc::new(Mutex::new(None));
        let service = DeleteCourseService::new(MockCourseRepo {
            result: Ok(()),
            seen: seen.clone(),
        });
        let id = Uuid::new_v4();

        service.execute(id).await.unwrap();

        assert_eq!(*seen.lock().unwrap(), Some(id));
    }

    #[tokio::test]
    async fn missing_rows_surface_as_not_found() {
        let service = DeleteCourseService::new(MockCourseRepo {
            result: Err(CourseRepositoryError::NotFound),
            seen: Arc::new(Mutex::new(None)),
        });

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(DeleteCourseError::NotFound)));
    }

    #[tokio::test]
    async fn maps_database_errors() {
        let service = DeleteCourseService::new(MockCourseRepo {
            result: Err(CourseRepositoryError::DatabaseError(
                "connection timeout".to_string(),
            )),
            seen: Arc::new(Mutex::new(None)),
        });

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(
            result,
            Err(DeleteCourseError::RepositoryError(msg)) if msg == "connection timeout"
        ));
    }
}
