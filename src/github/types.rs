// GitHub API response types.
// Defines structs for deserializing profile and repository responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public GitHub user profile (`GET /users/{handle}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    /// Personal site. GitHub reports an unset value as an empty string.
    pub blog: Option<String>,
    pub email: Option<String>,
    pub twitter_username: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Display name, falling back to the login when no name is set.
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or(self.login.as_str())
    }

    /// Personal site, if one is set.
    pub fn website(&self) -> Option<&str> {
        non_empty(self.blog.as_deref())
    }
}

/// GitHub repository (`GET /users/{handle}/repos`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub default_branch: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub fork: bool,
}

impl Repository {
    /// Homepage link, if one is set.
    pub fn homepage(&self) -> Option<&str> {
        non_empty(self.homepage.as_deref())
    }
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
