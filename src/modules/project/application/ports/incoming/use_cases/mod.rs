mod create_project;
mod delete_project;
mod get_projects;
mod patch_project;

pub use create_project::{CreateProjectCommand, CreateProjectError, CreateProjectUseCase};
pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
pub use patch_project::{PatchProjectCommand, PatchProjectError, PatchProjectUseCase};
