mod create_technology;
mod delete_technology;
mod get_public_technologies;
mod get_technologies;
mod update_technology;

pub use create_technology::create_technology_handler;
pub use delete_technology::delete_technology_handler;
pub use get_public_technologies::get_public_technologies_handler;
pub use get_technologies::get_technologies_handler;
pub use update_technology::update_technology_handler;
