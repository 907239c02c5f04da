use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::service::adapter::outgoing::sea_orm_entity::services::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::service::application::ports::outgoing::{
    NewServiceData, ServicePatchData, ServiceRepository, ServiceRepositoryError,
};
use crate::modules::service::domain::entities::Service;
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ServiceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ServiceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceRepository for ServiceRepositoryPostgres {
    async fn list_services(
        &self,
        only_active: bool,
    ) -> Result<Vec<Service>, ServiceRepositoryError> {
        let mut query = Entity::find();

        if only_active {
            query = query.filter(Column::Active.eq(true));
        }

        let models = query
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_service).collect())
    }

    async fn max_sort_order(&self) -> Result<Option<i32>, ServiceRepositoryError> {
        let top = Entity::find()
            .order_by_desc(Column::SortOrder)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(top.map(|m| m.sort_order))
    }

    async fn insert_service(
        &self,
        data: NewServiceData,
    ) -> Result<Service, ServiceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            icon: Set(data.icon),
            gradient: Set(data.gradient),
            features: Set(data.features),
            active: Set(data.active),
            sort_order: Set(data.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_service(inserted))
    }

    async fn update_service(
        &self,
        service_id: Uuid,
        data: ServicePatchData,
    ) -> Result<Service, ServiceRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }

        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }

        if let PatchField::Value(icon) = data.icon {
            model.icon = Set(icon);
        }

        if let PatchField::Value(gradient) = data.gradient {
            model.gradient = Set(gradient);
        }

        if let PatchField::Value(features) = data.features {
            model.features = Set(features);
        }

        if let PatchField::Value(active) = data.active {
            model.active = Set(active);
        }

        if let PatchField::Value(sort_order) = data.sort_order {
            model.sort_order = Set(sort_order);
        }

        let has_changes = model.title.is_set()
            || model.description.is_set()
            || model.icon.is_set()
            || model.gradient.is_set()
            || model.features.is_set()
            || model.active.is_set()
            || model.sort_order.is_set();

        // An empty patch is a read: return the row as it stands.
        if !has_changes {
            let current = Entity::find_by_id(service_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ServiceRepositoryError::NotFound)?;

            return Ok(model_to_service(current));
        }

        // Batch updates skip ActiveModelBehavior, so stamp the column here.
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(service_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let updated = results
            .into_iter()
            .next()
            .ok_or(ServiceRepositoryError::NotFound)?;

        Ok(model_to_service(updated))
    }

    async fn delete_service(&self, service_id: Uuid) -> Result<(), ServiceRepositoryError> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(service_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ServiceRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_service(model: services::Model) -> Service {
    Service {
        id: model.id,
        title: model.title,
        description: model.description,
        icon: model.icon,
        gradient: model.gradient,
        features: model.features,
        active: model.active,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ServiceRepositoryError {
    ServiceRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
