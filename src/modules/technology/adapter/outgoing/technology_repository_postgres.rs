use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::technology::adapter::outgoing::sea_orm_entity::technologies::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::technology::application::ports::outgoing::{
    NewTechnologyData, TechnologyPatchData, TechnologyRepository, TechnologyRepositoryError,
};
use crate::modules::technology::domain::entities::Technology;
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct TechnologyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TechnologyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TechnologyRepository for TechnologyRepositoryPostgres {
    async fn list_technologies(
        &self,
        only_active: bool,
    ) -> Result<Vec<Technology>, TechnologyRepositoryError> {
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

        Ok(models.into_iter().map(model_to_technology).collect())
    }

    async fn max_sort_order(&self) -> Result<Option<i32>, TechnologyRepositoryError> {
        let top = Entity::find()
            .order_by_desc(Column::SortOrder)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(top.map(|m| m.sort_order))
    }

    async fn insert_technology(
        &self,
        data: NewTechnologyData,
    ) -> Result<Technology, TechnologyRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            category: Set(data.category),
            icon: Set(data.icon),
            expertise: Set(data.expertise),
            color: Set(data.color),
            active: Set(data.active),
            sort_order: Set(data.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_technology(inserted))
    }

    async fn update_technology(
        &self,
        technology_id: Uuid,
        data: TechnologyPatchData,
    ) -> Result<Technology, TechnologyRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name);
        }

        if let PatchField::Value(category) = data.category {
            model.category = Set(category);
        }

        if let PatchField::Value(icon) = data.icon {
            model.icon = Set(icon);
        }

        if let PatchField::Value(expertise) = data.expertise {
            model.expertise = Set(expertise);
        }

        if let PatchField::Value(color) = data.color {
            model.color = Set(color);
        }

        if let PatchField::Value(active) = data.active {
            model.active = Set(active);
        }

        if let PatchField::Value(sort_order) = data.sort_order {
            model.sort_order = Set(sort_order);
        }

        let has_changes = model.name.is_set()
            || model.category.is_set()
            || model.icon.is_set()
            || model.expertise.is_set()
            || model.color.is_set()
            || model.active.is_set()
            || model.sort_order.is_set();

        // An empty patch is a read: return the row as it stands.
        if !has_changes {
            let current = Entity::find_by_id(technology_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(TechnologyRepositoryError::NotFound)?;

            return Ok(model_to_technology(current));
        }

        // Batch updates skip ActiveModelBehavior, so stamp the column here.
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(technology_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let updated = results
            .into_iter()
            .next()
            .ok_or(TechnologyRepositoryError::NotFound)?;

        Ok(model_to_technology(updated))
    }

    async fn delete_technology(
        &self,
        technology_id: Uuid,
    ) -> Result<(), TechnologyRepositoryError> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(technology_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(TechnologyRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_technology(model: technologies::Model) -> Technology {
    Technology {
        id: model.id,
        name: model.name,
        category: model.category,
        icon: model.icon,
        expertise: model.expertise,
        color: model.color,
        active: model.active,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> TechnologyRepositoryError {
    TechnologyRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
