mod technology_repository;

pub use technology_repository::{
    NewTechnologyData, TechnologyPatchData, TechnologyRepository, TechnologyRepositoryError,
};
