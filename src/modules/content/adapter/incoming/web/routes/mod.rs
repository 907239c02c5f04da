mod get_content;
// Public so the OpenAPI document can reach the annotated handler.
pub mod get_public_content;
mod update_content;

pub use get_content::get_content_handler;
pub use get_public_content::get_public_content_handler;
pub use update_content::update_content_handler;
