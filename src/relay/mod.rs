// Contact relay module.
// Forwards contact form submissions to the EmailJS delivery service.

pub mod client;
pub mod contact;
pub mod types;

#[cfg(test)]
pub use client::MockRelay;
pub use client::{EmailJsClient, Relay};
pub use contact::{ContactService, FAILURE_MESSAGE, SUCCESS_MESSAGE};
pub use types::{ContactMessage, SubmitOutcome, TemplateParams};
