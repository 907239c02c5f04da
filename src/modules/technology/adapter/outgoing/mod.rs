pub mod sea_orm_entity;
pub mod technology_repository_postgres;
