// GitHub API module.
// Provides client and types for reading profiles and repositories from the GitHub REST API.

pub mod client;
pub mod endpoints;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod types;

pub use client::{GITHUB_API_BASE, GitHubClient};
#[cfg(test)]
pub use endpoints::MockGitHubApi;
pub use endpoints::{GitHubApi, MAX_PER_PAGE};
pub use types::*;
