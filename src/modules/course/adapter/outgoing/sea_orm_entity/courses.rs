use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

// No Eq: the price columns are f64.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub short_description: String,

    #[sea_orm(column_type = "Text")]
    pub category: String,

    #[sea_orm(column_type = "Text")]
    pub level: String,

    #[sea_orm(column_type = "Text")]
    pub duration: String,

    pub projects: i32,

    #[sea_orm(column_type = "JsonBinary")]
    pub modes: Vec<String>,

    pub price_online: Option<f64>,

    pub price_offline: Option<f64>,

    #[sea_orm(column_type = "Text")]
    pub icon: String,

    #[sea_orm(column_type = "Text")]
    pub gradient: String,

    // Nested sections, stored as JSONB
    #[sea_orm(column_type = "JsonBinary")]
    pub curriculum: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub tools: Vec<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub features: Vec<String>,

    pub popular: bool,

    pub active: bool,

    pub sort_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        // No DB trigger maintains this column
        if !insert {
            self.updated_at = Set(chrono::Utc::now().into());
        }

        Ok(self)
    }
}
