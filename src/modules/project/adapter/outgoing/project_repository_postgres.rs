use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::ports::outgoing::{
    NewProjectData, ProjectPatchData, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::project::domain::entities::Project;
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list_projects(
        &self,
        only_active: bool,
    ) -> Result<Vec<Project>, ProjectRepositoryError> {
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

        Ok(models.into_iter().map(model_to_project).collect())
    }

    async fn max_sort_order(&self) -> Result<Option<i32>, ProjectRepositoryError> {
        let top = Entity::find()
            .order_by_desc(Column::SortOrder)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(top.map(|m| m.sort_order))
    }

    async fn insert_project(
        &self,
        data: NewProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            image: Set(data.image),
            category: Set(data.category),
            technologies: Set(data.technologies),
            link: Set(data.link),
            github: Set(data.github),
            featured: Set(data.featured),
            active: Set(data.active),
            sort_order: Set(data.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_project(inserted))
    }

    async fn update_project(
        &self,
        project_id: Uuid,
        data: ProjectPatchData,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }

        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }

        if let PatchField::Value(image) = data.image {
            model.image = Set(image);
        }

        if let PatchField::Value(category) = data.category {
            model.category = Set(category);
        }

        if let PatchField::Value(technologies) = data.technologies {
            model.technologies = Set(technologies);
        }

        match data.link {
            PatchField::Unset => {}
            PatchField::Null => model.link = Set(None),
            PatchField::Value(url) => model.link = Set(Some(url)),
        }

        match data.github {
            PatchField::Unset => {}
            PatchField::Null => model.github = Set(None),
            PatchField::Value(url) => model.github = Set(Some(url)),
        }

        if let PatchField::Value(featured) = data.featured {
            model.featured = Set(featured);
        }

        if let PatchField::Value(active) = data.active {
            model.active = Set(active);
        }

        if let PatchField::Value(sort_order) = data.sort_order {
            model.sort_order = Set(sort_order);
        }

        let has_changes = model.title.is_set()
            || model.description.is_set()
            || model.image.is_set()
            || model.category.is_set()
            || model.technologies.is_set()
            || model.link.is_set()
            || model.github.is_set()
            || model.featured.is_set()
            || model.active.is_set()
            || model.sort_order.is_set();

        // An empty patch is a read: return the row as it stands.
        if !has_changes {
            let current = Entity::find_by_id(project_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ProjectRepositoryError::NotFound)?;

            return Ok(model_to_project(current));
        }

        // Batch updates skip ActiveModelBehavior, so stamp the column here.
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let updated = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        Ok(model_to_project(updated))
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(project_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_project(model: projects::Model) -> Project {
    Project {
        id: model.id,
        title: model.title,
        description: model.description,
        image: model.image,
        category: model.category,
        technologies: model.technologies,
        link: model.link,
        github: model.github,
        featured: model.featured,
        active: model.active,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
