// Contact form submission.
// Validates a message, hands it to the relay, and reduces the result to what the form displays.

use std::sync::Arc;

use validator::{Validate, ValidationErrors};

use crate::error::SubmitError;

use super::client::Relay;
use super::types::{ContactMessage, SubmitOutcome, TemplateParams};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again later.";
const INVALID_MESSAGE: &str = "Please check the form and try again.";

/// Form fields in display order, so the first reported problem is stable.
const FIELDS: [&str; 3] = ["name", "email", "message"];

pub struct ContactService<R: Relay> {
    relay: Arc<R>,
}

impl<R: Relay> ContactService<R> {
    pub fn new(relay: Arc<R>) -> Self {
        Self { relay }
    }

    /// Validate and deliver a contact message.
    ///
    /// Relay failures are logged here; the returned error only carries a
    /// message suitable for display.
    pub async fn submit_contact_message(
        &self,
        message: &ContactMessage,
    ) -> Result<(), SubmitError> {
        message
            .validate()
            .map_err(|errors| SubmitError::new(first_problem(&errors)))?;

        let params = TemplateParams::from(message);
        match self.relay.send(&params).await {
            Ok(()) => {
                tracing::info!(subject = %params.title, "contact message sent");
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to send contact message");
                Err(SubmitError::new(FAILURE_MESSAGE))
            }
        }
    }

    /// Submit and convert the result into the form's success flag and text.
    pub async fn submit(&self, message: &ContactMessage) -> SubmitOutcome {
        match self.submit_contact_message(message).await {
            Ok(()) => SubmitOutcome {
                success: true,
                message: SUCCESS_MESSAGE.to_string(),
            },
            Err(err) => SubmitOutcome {
                success: false,
                message: err.message().to_string(),
            },
        }
    }
}

/// Message for the first invalid field.
fn first_problem(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    FIELDS
        .iter()
        .filter_map(|field| fields.get(*field))
        .flat_map(|errors| errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| INVALID_MESSAGE.to_string())
}
