use async_trait::async_trait;

use crate::modules::course::application::ports::incoming::use_cases::{
    CreateCourseCommand, CreateCourseError, CreateCourseUseCase,
};
use crate::modules::course::application::ports::outgoing::{
    CourseRepository, CourseRepositoryError, NewCourseData,
};
use crate::modules::course::domain::entities::Course;

pub struct CreateCourseService<R: CourseRepository> {
    repository: R,
}

impl<R: CourseRepository> CreateCourseService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: CourseRepository + Send + Sync> CreateCourseUseCase for CreateCourseService<R> {
    async fn execute(&self, command: CreateCourseCommand) -> Result<Course, CreateCourseError> {
        let map_repo_err = |err: CourseRepositoryError| match err {
            CourseRepositoryError::NotFound => CreateCourseError::RepositoryError(
                "unexpected not-found while creating".to_string(),
            ),
            CourseRepositoryError::DatabaseError(msg) => CreateCourseError::RepositoryError(msg),
        };

        let sort_order = match command.sort_order {
            Some(value) => value,
            None => self
                .repository
                .max_sort_order()
                .await
                .map_err(map_repo_err)?
                .map_or(1, |max| max + 1),
        };

        self.repository
            .insert_course(NewCourseData {
                title: command.title,
                short_description: command.short_description,
                category: command.category,
                level: command.level,
                duration: command.duration,
                projects: command.projects,
                modes: command.modes,
                price_online: command.price_online,
                price_offline: command.price_offline,
                icon: command.icon,
                gradient: command.gradient,
                curriculum: command.curriculum,
                tools: command.tools,
                features: command.features,
                popular: command.popular,
                active: command.active,
                sort_order,
            })
            .await
            .map_err(map_repo_err)
    }
}
