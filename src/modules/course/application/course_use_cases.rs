use std::sync::Arc;

use crate::modules::course::application::ports::incoming::use_cases::{
    CreateCourseUseCase, DeleteCourseUseCase, GetCoursesUseCase, PatchCourseUseCase,
};

#[derive(Clone)]
pub struct CourseUseCases {
    pub get_list: Arc<dyn GetCoursesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateCourseUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchCourseUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCourseUseCase + Send + Sync>,
}
