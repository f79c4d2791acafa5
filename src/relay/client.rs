// EmailJS HTTP client.
// Delivers contact form submissions through the EmailJS REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::EmailConfig;
use crate::error::{Error, Result};

use super::types::TemplateParams;

const SEND_ENDPOINT: &str = "/api/v1.0/email/send";

/// Outbound email delivery.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Relay: Send + Sync {
    /// Send one templated message.
    async fn send(&self, params: &TemplateParams) -> Result<()>;
}

/// Request body expected by the EmailJS send endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// EmailJS relay authenticated with a public key.
#[derive(Debug)]
pub struct EmailJsClient {
    client: Client,
    base_url: String,
    config: EmailConfig,
}

impl EmailJsClient {
    pub fn new(base_url: &str, config: EmailConfig) -> Result<Self> {
        if !config.is_configured() {
            tracing::warn!("EmailJS credentials are placeholders; contact messages will fail");
        }

        let client = Client::builder()
            .user_agent("folio")
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            config,
        })
    }

    fn request<'a>(&'a self, params: &'a TemplateParams) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        }
    }
}

#[async_trait]
impl Relay for EmailJsClient {
    async fn send(&self, params: &TemplateParams) -> Result<()> {
        let url = format!("{}{}", self.base_url, SEND_ENDPOINT);
        tracing::debug!(%url, template_id = %self.config.template_id, "POST");

        let response = self
            .client
            .post(&url)
            .json(&self.request(params))
            .send()
            .await
            .map_err(Error::Http)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(Error::Relay(format!("HTTP {}: {}", status, body.trim())))
    }
}
