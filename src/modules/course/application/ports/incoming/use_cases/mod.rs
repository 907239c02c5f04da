mod create_course;
mod delete_course;
mod get_courses;
mod patch_course;

pub use create_course::{
    CreateCourseCommand, CreateCourseError, CreateCourseInput, CreateCourseUseCase,
};
pub use delete_course::{DeleteCourseError, DeleteCourseUseCase};
pub use get_courses::{GetCoursesError, GetCoursesUseCase};
pub use patch_course::{PatchCourseCommand, PatchCourseError, PatchCourseInput, PatchCourseUseCase};
