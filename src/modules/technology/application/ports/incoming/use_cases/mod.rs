mod create_technology;
mod delete_technology;
mod get_technologies;
mod patch_technology;

pub use create_technology::{
    CreateTechnologyCommand, CreateTechnologyError, CreateTechnologyUseCase,
};
pub use delete_technology::{DeleteTechnologyError, DeleteTechnologyUseCase};
pub use get_technologies::{GetTechnologiesError, GetTechnologiesUseCase};
pub use patch_technology::{PatchTechnologyCommand, PatchTechnologyError, PatchTechnologyUseCase};
