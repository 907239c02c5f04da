mod service_repository;

pub use service_repository::{
    NewServiceData, ServicePatchData, ServiceRepository, ServiceRepositoryError,
};
