mod delete_message;
mod get_messages;
mod set_message_read;
mod submit_message;

pub use delete_message::{DeleteMessageError, DeleteMessageUseCase};
pub use get_messages::{GetMessagesError, GetMessagesUseCase};
pub use set_message_read::{SetMessageReadCommand, SetMessageReadError, SetMessageReadUseCase};
pub use submit_message::{SubmitMessageCommand, SubmitMessageError, SubmitMessageUseCase};
