mod delete_message;
mod get_messages;
// Public so the OpenAPI document can reach the annotated handler.
pub mod submit_message;
mod update_message;

pub use delete_message::delete_message_handler;
pub use get_messages::get_messages_handler;
pub use submit_message::{submit_message_handler, SubmitMessageRequest};
pub use update_message::update_message_handler;
