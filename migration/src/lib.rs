pub use sea_orm_migration::prelude::*;

mod m20260805_091423_create_table_sessions;
mod m20260805_092051_create_table_services;
mod m20260805_092518_create_table_projects;
mod m20260805_092902_create_table_testimonials;
mod m20260805_093247_create_table_technologies;
mod m20260805_093631_create_table_courses;
mod m20260805_094105_create_table_contact_messages;
mod m20260805_094530_create_table_site_content;
mod m20260805_094914_create_table_site_settings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260805_091423_create_table_sessions::Migration),
            Box::new(m20260805_092051_create_table_services::Migration),
            Box::new(m20260805_092518_create_table_projects::Migration),
            Box::new(m20260805_092902_create_table_testimonials::Migration),
            Box::new(m20260805_093247_create_table_technologies::Migration),
            Box::new(m20260805_093631_create_table_courses::Migration),
            Box::new(m20260805_094105_create_table_contact_messages::Migration),
            Box::new(m20260805_094530_create_table_site_content::Migration),
            Box::new(m20260805_094914_create_table_site_settings::Migration),
        ]
    }
}
