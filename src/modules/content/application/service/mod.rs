mod get_content_service;
mod upsert_content_service;

pub use get_content_service::GetContentService;
pub use upsert_content_service::UpsertContentService;
