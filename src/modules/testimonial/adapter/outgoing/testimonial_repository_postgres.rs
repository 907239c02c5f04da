use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::testimonial::adapter::outgoing::sea_orm_entity::testimonials::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::testimonial::application::ports::outgoing::{
    NewTestimonialData, TestimonialPatchData, TestimonialRepository, TestimonialRepositoryError,
};
use crate::modules::testimonial::domain::entities::Testimonial;
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct TestimonialRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TestimonialRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TestimonialRepository for TestimonialRepositoryPostgres {
    async fn list_testimonials(
        &self,
        only_active: bool,
    ) -> Result<Vec<Testimonial>, TestimonialRepositoryError> {
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

        Ok(models.into_iter().map(model_to_testimonial).collect())
    }

    async fn max_sort_order(&self) -> Result<Option<i32>, TestimonialRepositoryError> {
        let top = Entity::find()
            .order_by_desc(Column::SortOrder)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(top.map(|m| m.sort_order))
    }

    async fn insert_testimonial(
        &self,
        data: NewTestimonialData,
    ) -> Result<Testimonial, TestimonialRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            role: Set(data.role),
            company: Set(data.company),
            quote: Set(data.quote),
            image: Set(data.image),
            rating: Set(data.rating),
            active: Set(data.active),
            sort_order: Set(data.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_testimonial(inserted))
    }

    async fn update_testimonial(
        &self,
        testimonial_id: Uuid,
        data: TestimonialPatchData,
    ) -> Result<Testimonial, TestimonialRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name);
        }

        if let PatchField::Value(role) = data.role {
            model.role = Set(role);
        }

        if let PatchField::Value(company) = data.company {
            model.company = Set(company);
        }

        if let PatchField::Value(quote) = data.quote {
            model.quote = Set(quote);
        }

        match data.image {
            PatchField::Unset => {}
            PatchField::Null => model.image = Set(None),
            PatchField::Value(url) => model.image = Set(Some(url)),
        }

        if let PatchField::Value(rating) = data.rating {
            model.rating = Set(rating);
        }

        if let PatchField::Value(active) = data.active {
            model.active = Set(active);
        }

        if let PatchField::Value(sort_order) = data.sort_order {
            model.sort_order = Set(sort_order);
        }

        let has_changes = model.name.is_set()
            || model.role.is_set()
            || model.company.is_set()
            || model.quote.is_set()
            || model.image.is_set()
            || model.rating.is_set()
            || model.active.is_set()
            || model.sort_order.is_set();

        // An empty patch is a read: return the row as it stands.
        if !has_changes {
            let current = Entity::find_by_id(testimonial_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(TestimonialRepositoryError::NotFound)?;

            return Ok(model_to_testimonial(current));
        }

        // Batch updates skip ActiveModelBehavior, so stamp the column here.
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(testimonial_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let updated = results
            .into_iter()
            .next()
            .ok_or(TestimonialRepositoryError::NotFound)?;

        Ok(model_to_testimonial(updated))
    }

    async fn delete_testimonial(
        &self,
        testimonial_id: Uuid,
    ) -> Result<(), TestimonialRepositoryError> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(testimonial_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(TestimonialRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_testimonial(model: testimonials::Model) -> Testimonial {
    Testimonial {
        id: model.id,
        name: model.name,
        role: model.role,
        company: model.company,
        quote: model.quote,
        image: model.image,
        rating: model.rating,
        active: model.active,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> TestimonialRepositoryError {
    TestimonialRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
