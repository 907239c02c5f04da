mod delete_message_service;
mod get_messages_service;
mod set_message_read_service;
mod submit_message_service;

pub use delete_message_service::DeleteMessageService;
pub use get_messages_service::GetMessagesService;
pub use set_message_read_service::SetMessageReadService;
pub use submit_message_service::SubmitMessageService;
