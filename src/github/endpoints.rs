// GitHub API endpoint functions.
// Provides the typed read operations the data layer depends on.

use async_trait::async_trait;

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{Profile, Repository};

/// Largest page size the repository listing endpoint accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Read-only GitHub operations used by the portfolio pages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Get a user's public profile.
    async fn get_user(&self, handle: &str) -> Result<Profile>;

    /// Get a user's public repositories, most recently updated first.
    async fn get_user_repos(&self, handle: &str, per_page: u32) -> Result<Vec<Repository>>;
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn get_user(&self, handle: &str) -> Result<Profile> {
        let response = self.get(&format!("/users/{}", handle)).await?;
        let profile: Profile = response.json().await?;
        Ok(profile)
    }

    async fn get_user_repos(&self, handle: &str, per_page: u32) -> Result<Vec<Repository>> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE).to_string();
        let params = [
            ("sort", "updated"),
            ("direction", "desc"),
            ("per_page", per_page.as_str()),
        ];
        let response = self
            .get_with_params(&format!("/users/{}/repos", handle), &params)
            .await?;
        let repos: Vec<Repository> = response.json().await?;
        Ok(repos)
    }
}
