use std::sync::Arc;

use crate::modules::message::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, GetMessagesUseCase, SetMessageReadUseCase, SubmitMessageUseCase,
};

#[derive(Clone)]
pub struct MessageUseCases {
    pub get_list: Arc<dyn GetMessagesUseCase + Send + Sync>,
    pub submit: Arc<dyn SubmitMessageUseCase + Send + Sync>,
    pub set_read: Arc<dyn SetMessageReadUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMessageUseCase + Send + Sync>,
}
