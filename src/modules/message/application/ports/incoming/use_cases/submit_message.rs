use async_trait::async_trait;

use crate::modules::message::domain::entities::ContactMessage;
use crate::shared::validation::{
    require_email, required_text, required_text_min, FieldError, FieldErrors,
};

#[derive(Debug, Clone)]
pub struct SubmitMessageCommand {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl SubmitMessageCommand {
    /// The contact form is the one unauthenticated write, so the bounds
    /// here are stricter than the admin create schemas.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        subject: Option<String>,
        message: Option<String>,
    ) -> Result<Self, Vec<FieldError>> {
        let mut errors = FieldErrors::new();

        let name = required_text_min(&mut errors, "name", name, 2);

        let email = required_text(&mut errors, "email", email);
        if !email.is_empty() {
            require_email(&mut errors, "email", &email);
        }

        let subject = required_text_min(&mut errors, "subject", subject, 5);
        let message = required_text_min(&mut errors, "message", message, 10);

        errors.finish()?;

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitMessageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitMessageUseCase: Send + Sync {
    async fn execute(&self, command: SubmitMessageCommand)
        -> Result<ContactMessage, SubmitMessageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_payload_on_every_bound() {
        let cmd = SubmitMessageCommand::new(
            Some("Jo".to_string()),
            Some("jo@x.com".to_string()),
            Some("Hello there".to_string()),
            Some("This is a test message.".to_string()),
        )
        .unwrap();

        assert_eq!(cmd.name, "Jo");
        assert_eq!(cmd.email, "jo@x.com");
    }

    #[test]
    fn every_bound_violation_is_reported_in_one_pass() {
        let result = SubmitMessageCommand::new(
            Some("J".to_string()),
            Some("not-an-email".to_string()),
            Some("Hi".to_string()),
            Some("short".to_string()),
        );

        let details = result.unwrap_err();
        let fields: Vec<&str> = details.iter().map(|d| d.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "subject", "message"]);
        assert_eq!(details[0].message, "must be at least 2 characters");
        assert_eq!(details[1].message, "must be a valid email address");
    }

    #[test]
    fn a_missing_body_reports_every_field() {
        let details = SubmitMessageCommand::new(None, None, None, None).unwrap_err();

        assert_eq!(details.len(), 4);
        assert!(details.iter().all(|d| d.message == "is required"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_before_the_length_check() {
        let result = SubmitMessageCommand::new(
            Some("  J  ".to_string()),
            Some("jo@x.com".to_string()),
            Some("Hello there".to_string()),
            Some("This is a test message.".to_string()),
        );

        let details = result.unwrap_err();
        assert_eq!(details[0].field, "name");
    }
}
