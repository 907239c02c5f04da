mod get_content;
mod upsert_content;

pub use get_content::{GetContentCommand, GetContentError, GetContentUseCase};
pub use upsert_content::{UpsertContentCommand, UpsertContentError, UpsertContentUseCase};
