// Contact form types.
// Defines the submitted record, the relay template parameters, and the user-facing outcome.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(custom(function = "not_blank", message = "Please enter your name."))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "Please enter a message."))]
    pub message: String,
    /// Subject line. Defaults to "Message from <name>".
    pub subject: Option<String>,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            subject: None,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Subject line sent to the relay.
    pub fn subject(&self) -> String {
        match self.subject.as_deref().map(str::trim) {
            Some(subject) if !subject.is_empty() => subject.to_string(),
            _ => format!("Message from {}", self.name.trim()),
        }
    }
}

/// Variables substituted into the relay's email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Rendered as the subject line by the template.
    pub title: String,
}

impl From<&ContactMessage> for TemplateParams {
    fn from(message: &ContactMessage) -> Self {
        Self {
            name: message.name.trim().to_string(),
            email: message.email.trim().to_string(),
            message: message.message.clone(),
            title: message.subject(),
        }
    }
}

/// Result of a submission as shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
