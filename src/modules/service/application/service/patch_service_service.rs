use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::service::application::ports::incoming::use_cases::{
    PatchServiceCommand, PatchServiceError, PatchServiceUseCase,
};
use crate::modules::service::application::ports::outgoing::{
    ServiceRepository, ServiceRepositoryError,
};
use crate::modules::service::domain::entities::Service;

pub struct PatchServiceService<R>
where
    R: ServiceRepository,
{
    repository: R,
}

impl<R> PatchServiceService<R>
where
    R: ServiceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchServiceUseCase for PatchServiceService<R>
where
    R: ServiceRepository + Send + Sync,
{
    async fn execute(
        &self,
        service_id: Uuid,
        command: PatchServiceCommand,
    ) -> Result<Service, PatchServiceError> {
        self.repository
            .update_service(service_id, command.data)
            .await
            .map_err(|e| match e {
                ServiceRepositoryError::NotFound => PatchServiceError::NotFound,
                ServiceRepositoryError::DatabaseError(msg) => {
                    PatchServiceError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    use crate::modules::service::application::ports::outgoing::{
        NewServiceData, ServicePatchData,
    };
    use crate::shared::patch::PatchField;

    struct MockServiceRepo {
        update_result: Result<Service, ServiceRepositoryError>,
        seen: Arc<Mutex<Option<(Uuid, ServicePatchData)>>>,
    }

    #[async_trait]
    impl ServiceRepository for MockServiceRepo {
        async fn list_services(
            &self,
            _only_active: bool,
        ) -> Result<Vec<Service>, ServiceRepositoryError> {
            unimplemented!("not needed for patch tests")
        }

        async fn max_sort_order(&self) -> Result<Option<i32>, ServiceRepositoryError> {
            unimplemented!("not needed for patch tests")
        }

        async fn insert_service(
            &self,
            _data: NewServiceData,
        ) -> Result<Service, ServiceRepositoryError> {
            unimplemented!("not needed for patch tests")
        }

        async fn update_service(
            &self,
            service_id: Uuid,
            data: ServicePatchData,
        ) -> Result<Service, ServiceRepositoryError> {
            *self.seen.lock().unwrap() = Some((service_id, data));
            self.update_result.clone()
        }

        async fn delete_service(&self, _service_id: Uuid) -> Result<(), ServiceRepositoryError> {
            unimplemented!("not needed for patch tests")
        }
    }

    fn stored_service() -> Service {
        Service {
            id: Uuid::new_v4(),
            title: "Web Development".to_string(),
            description: "Responsive sites".to_string(),
            icon: "code".to_string(),
            gradient: "from-blue-500".to_string(),
            features: vec!["SEO".to_string()],
            active: false,
            sort_order: 2,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn deactivate_command() -> PatchServiceCommand {
        PatchServiceCommand::new(
            PatchField::Unset,
            PatchField::Unset,
            PatchField::Unset,
            PatchField::Unset,
            PatchField::Unset,
            PatchField::Value(false),
            PatchField::Unset,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn forwards_the_id_and_patch_to_the_repository() {
        let seen = Arc::new(Mutex::new(None));
        let repo = MockServiceRepo {
            update_result: Ok(stored_service()),
            seen: Arc::clone(&seen),
        };
        let id = Uuid::new_v4();

        let result = PatchServiceService::new(repo)
            .execute(id, deactivate_command())
            .await;

        assert!(result.is_ok());
        let (seen_id, data) = seen.lock().unwrap().take().unwrap();
        assert_eq!(seen_id, id);
        assert_eq!(data.active, PatchField::Value(false));
        assert_eq!(data.title, PatchField::Unset);
    }

    #[tokio::test]
    async fn missing_rows_surface_as_not_found() {
        let repo = MockServiceRepo {
            update_result: Err(ServiceRepositoryError::NotFound),
            seen: Arc::new(Mutex::new(None)),
        };

        let result = PatchServiceService::new(repo)
            .execute(Uuid::new_v4(), deactivate_command())
            .await;

        assert!(matches!(result.unwrap_err(), PatchServiceError::NotFound));
    }

    #[tokio::test]
    async fn maps_database_errors() {
        let repo = MockServiceRepo {
            update_result: Err(ServiceRepositoryError::DatabaseError("db down".to_string())),
            seen: Arc::new(Mutex::new(None)),
        };

        let result = PatchServiceService::new(repo)
            .execute(Uuid::new_v4(), deactivate_command())
            .await;

        assert!(matches!(
            result.unwrap_err(),
            PatchServiceError::RepositoryError(msg) if msg == "db down"
        ));
    }
}
