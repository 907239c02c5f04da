mod create_course;
mod delete_course;
mod get_courses;
mod get_public_courses;
mod update_course;

pub use create_course::create_course_handler;
pub use delete_course::delete_course_handler;
pub use get_courses::get_courses_handler;
pub use get_public_courses::get_public_courses_handler;
pub use update_course::update_course_handler;
