mod create_course_service;
mod delete_course_service;
mod get_courses_service;
mod patch_course_service;

pub use create_course_service::CreateCourseService;
pub use delete_course_service::DeleteCourseService;
pub use get_courses_service::GetCoursesService;
pub use patch_course_service::PatchCourseService;
