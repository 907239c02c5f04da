use async_trait::async_trait;

use crate::modules::course::domain::entities::Course;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCoursesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCoursesUseCase: Send + Sync {
    /// `only_active` is true for the public surface, false for admin.
    async fn execute(&self, only_active: bool) -> Result<Vec<Course>, GetCoursesError>;
}
