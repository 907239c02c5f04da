use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::course::adapter::outgoing::sea_orm_entity::courses::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::course::application::ports::outgoing::{
    CoursePatchData, CourseRepository, CourseRepositoryError, NewCourseData,
};
use crate::modules::course::domain::entities::{Course, CurriculumSection};
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct CourseRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseRepository for CourseRepositoryPostgres {
    async fn list_courses(
        &self,
        only_active: bool,
    ) -> Result<Vec<Course>, CourseRepositoryError> {
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

        Ok(models.into_iter().map(model_to_course).collect())
    }

    async fn max_sort_order(&self) -> Result<Option<i32>, CourseRepositoryError> {
        let top = Entity::find()
            .order_by_desc(Column::SortOrder)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(top.map(|m| m.sort_order))
    }

    async fn insert_course(&self, data: NewCourseData) -> Result<Course, CourseRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            short_description: Set(data.short_description),
            category: Set(data.category),
            level: Set(data.level),
            duration: Set(data.duration),
            projects: Set(data.projects),
            modes: Set(data.modes),
            price_online: Set(data.price_online),
            price_offline: Set(data.price_offline),
            icon: Set(data.icon),
            gradient: Set(data.gradient),
            curriculum: Set(curriculum_to_json(&data.curriculum)),
            tools: Set(data.tools),
            features: Set(data.features),
            popular: Set(data.popular),
            active: Set(data.active),
            sort_order: Set(data.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_course(inserted))
    }

    async fn update_course(
        &self,
        course_id: Uuid,
        data: CoursePatchData,
    ) -> Result<Course, CourseRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }

        if let PatchField::Value(short_description) = data.short_description {
            model.short_description = Set(short_description);
        }

        if let PatchField::Value(category) = data.category {
            model.category = Set(category);
        }

        if let PatchField::Value(level) = data.level {
            model.level = Set(level);
        }

        if let PatchField::Value(duration) = data.duration {
            model.duration = Set(duration);
        }

        if let PatchField::Value(projects) = data.projects {
            model.projects = Set(projects);
        }

        if let PatchField::Value(modes) = data.modes {
            model.modes = Set(modes);
        }

        match data.price_online {
            PatchField::Unset => {}
            PatchField::Null => model.price_online = Set(None),
            PatchField::Value(price) => model.price_online = Set(Some(price)),
        }

        match data.price_offline {
            PatchField::Unset => {}
            PatchField::Null => model.price_offline = Set(None),
            PatchField::Value(price) => model.price_offline = Set(Some(price)),
        }

        if let PatchField::Value(icon) = data.icon {
            model.icon = Set(icon);
        }

        if let PatchField::Value(gradient) = data.gradient {
            model.gradient = Set(gradient);
        }

        if let PatchField::Value(curriculum) = data.curriculum {
            model.curriculum = Set(curriculum_to_json(&curriculum));
        }

        if let PatchField::Value(tools) = data.tools {
            model.tools = Set(tools);
        }

        if let PatchField::Value(features) = data.features {
            model.features = Set(features);
        }

        if let PatchField::Value(popular) = data.popular {
            model.popular = Set(popular);
        }

        if let PatchField::Value(active) = data.active {
            model.active = Set(active);
        }

        if let PatchField::Value(sort_order) = data.sort_order {
            model.sort_order = Set(sort_order);
        }

        let has_changes = model.title.is_set()
            || model.short_description.is_set()
            || model.category.is_set()
            || model.level.is_set()
            || model.duration.is_set()
            || model.projects.is_set()
            || model.modes.is_set()
            || model.price_online.is_set()
            || model.price_offline.is_set()
            || model.icon.is_set()
            || model.gradient.is_set()
            || model.curriculum.is_set()
            || model.tools.is_set()
            || model.features.is_set()
            || model.popular.is_set()
            || model.active.is_set()
            || model.sort_order.is_set();

        // An empty patch is a read: return the row as it stands.
        if !has_changes {
            let current = Entity::find_by_id(course_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(CourseRepositoryError::NotFound)?;

            return Ok(model_to_course(current));
        }

        // Batch updates skip ActiveModelBehavior, so stamp the column here.
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(course_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let updated = results
            .into_iter()
            .next()
            .ok_or(CourseRepositoryError::NotFound)?;

        Ok(model_to_course(updated))
    }

    async fn delete_course(&self, course_id: Uuid) -> Result<(), CourseRepositoryError> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(course_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(CourseRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_course(model: courses::Model) -> Course {
    Course {
        id: model.id,
        title: model.title,
        short_description: model.short_description,
        category: model.category,
        level: model.level,
        duration: model.duration,
        projects: model.projects,
        modes: model.modes,
        price_online: model.price_online,
        price_offline: model.price_offline,
        icon: model.icon,
        gradient: model.gradient,
        // A malformed stored document degrades to an empty syllabus.
        curriculum: serde_json::from_value(model.curriculum).unwrap_or_default(),
        tools: model.tools,
        features: model.features,
        popular: model.popular,
        active: model.active,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn curriculum_to_json(sections: &[CurriculumSection]) -> serde_json::Value {
    serde_json::to_value(sections).unwrap_or_default()
}

fn map_db_err(e: DbErr) -> CourseRepositoryError {
    CourseRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
