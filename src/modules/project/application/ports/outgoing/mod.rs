mod project_repository;

pub use project_repository::{
    NewProjectData, ProjectPatchData, ProjectRepository, ProjectRepositoryError,
};
