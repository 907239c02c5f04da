mod course_repository;

pub use course_repository::{
    CoursePatchData, CourseRepository, CourseRepositoryError, NewCourseData,
};
