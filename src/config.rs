//! Configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is read first when present, so
//! local development can keep credentials out of the shell.
//!
//! ## Variables
//!
//! - `GITHUB_USERNAME` - Account whose profile and projects are shown (default: `yourusername`)
//! - `GITHUB_API_BASE` - REST API root (default: `https://api.github.com`)
//! - `EMAILJS_SERVICE_ID` - Relay service id (default: `YOUR_SERVICE_ID`)
//! - `EMAILJS_TEMPLATE_ID` - Relay template id (default: `YOUR_TEMPLATE_ID`)
//! - `EMAILJS_PUBLIC_KEY` - Relay public key (default: `YOUR_PUBLIC_KEY`)
//! - `EMAILJS_API_BASE` - Relay API root (default: `https://api.emailjs.com`)
//! - `CACHE_TTL_SECONDS` - Response cache TTL (default: 300)
//! - `RUST_LOG` - Log filter (default: `info`)

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_TTL;
use crate::github::GITHUB_API_BASE;

pub const DEFAULT_USERNAME: &str = "yourusername";
pub const EMAILJS_API_BASE: &str = "https://api.emailjs.com";

pub const PLACEHOLDER_SERVICE_ID: &str = "YOUR_SERVICE_ID";
pub const PLACEHOLDER_TEMPLATE_ID: &str = "YOUR_TEMPLATE_ID";
pub const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";

/// Credentials for the email relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailConfig {
    /// True when every credential was actually provided.
    pub fn is_configured(&self) -> bool {
        self.service_id != PLACEHOLDER_SERVICE_ID
            && self.template_id != PLACEHOLDER_TEMPLATE_ID
            && self.public_key != PLACEHOLDER_PUBLIC_KEY
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub github_username: String,
    pub github_api_base: String,
    pub email: EmailConfig,
    pub emailjs_api_base: String,
    pub cache_ttl: Duration,
}

impl Config {
    /// Loads configuration from the process environment (and `.env`, if any).
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str, default: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let cache_ttl = lookup("CACHE_TTL_SECONDS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TTL);

        Self {
            github_username: var("GITHUB_USERNAME", DEFAULT_USERNAME),
            github_api_base: var("GITHUB_API_BASE", GITHUB_API_BASE),
            email: EmailConfig {
                service_id: var("EMAILJS_SERVICE_ID", PLACEHOLDER_SERVICE_ID),
                template_id: var("EMAILJS_TEMPLATE_ID", PLACEHOLDER_TEMPLATE_ID),
                public_key: var("EMAILJS_PUBLIC_KEY", PLACEHOLDER_PUBLIC_KEY),
            },
            emailjs_api_base: var("EMAILJS_API_BASE", EMAILJS_API_BASE),
            cache_ttl,
        }
    }
}
