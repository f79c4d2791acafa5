// Remote data client.
// Fetches profiles and repository lists, consulting the response cache first.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::cache::ResponseCache;
use crate::error::FetchError;
use crate::github::{GitHubApi, MAX_PER_PAGE, Profile, Repository};

// ASCII alphanumerics and hyphens, no leading or trailing hyphen, at most 39 chars.
static HANDLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,37}[A-Za-z0-9])?$").unwrap());

/// Whether `handle` can be a GitHub login, and so is safe to put in a request path.
pub fn is_valid_handle(handle: &str) -> bool {
    HANDLE_REGEX.is_match(handle)
}

/// A cached API response.
#[derive(Debug, Clone)]
pub enum Payload {
    Profile(Arc<Profile>),
    Repositories(Arc<Vec<Repository>>),
}

/// Cache key for a user's profile.
pub fn profile_key(handle: &str) -> String {
    format!("profile-{}", handle)
}

/// Cache key for a user's repository list.
pub fn repos_key(handle: &str) -> String {
    format!("repos-{}", handle)
}

/// Reads profile and repository data through an injected cache.
///
/// Concurrent misses on the same key each go to the network; whichever
/// response is stored last is what later callers see.
pub struct DataClient<A: GitHubApi> {
    api: Arc<A>,
    cache: Arc<ResponseCache<Payload>>,
}

impl<A: GitHubApi> DataClient<A> {
    pub fn new(api: Arc<A>, cache: Arc<ResponseCache<Payload>>) -> Self {
        Self { api, cache }
    }

    pub fn cache(&self) -> &ResponseCache<Payload> {
        &self.cache
    }

    /// Fetch a user's profile.
    ///
    /// Within the cache TTL this returns the same `Arc` as the call that
    /// populated the entry. Failures are logged and nothing is cached.
    pub async fn fetch_profile(&self, handle: &str) -> Result<Arc<Profile>, FetchError> {
        if !is_valid_handle(handle) {
            tracing::error!(handle, "invalid GitHub handle");
            return Err(FetchError::Profile);
        }

        let key = profile_key(handle);
        if let Some(Payload::Profile(profile)) = self.cache.get(&key) {
            tracing::debug!(%key, "cache hit");
            return Ok(profile);
        }

        tracing::debug!(%key, "cache miss");
        match self.api.get_user(handle).await {
            Ok(profile) => {
                let profile = Arc::new(profile);
                self.cache.put(key, Payload::Profile(Arc::clone(&profile)));
                Ok(profile)
            }
            Err(err) => {
                tracing::error!(handle, error = %err, "failed to fetch GitHub profile");
                Err(FetchError::Profile)
            }
        }
    }

    /// Fetch up to 100 of a user's repositories, most recently updated first.
    pub async fn fetch_repositories(
        &self,
        handle: &str,
    ) -> Result<Arc<Vec<Repository>>, FetchError> {
        if !is_valid_handle(handle) {
            tracing::error!(handle, "invalid GitHub handle");
            return Err(FetchError::Repositories);
        }

        let key = repos_key(handle);
        if let Some(Payload::Repositories(repos)) = self.cache.get(&key) {
            tracing::debug!(%key, "cache hit");
            return Ok(repos);
        }

        tracing::debug!(%key, "cache miss");
        match self.api.get_user_repos(handle, MAX_PER_PAGE).await {
            Ok(repos) => {
                tracing::info!(handle, count = repos.len(), "fetched repositories");
                let repos = Arc::new(repos);
                self.cache.put(key, Payload::Repositories(Arc::clone(&repos)));
                Ok(repos)
            }
            Err(err) => {
                tracing::error!(handle, error = %err, "failed to fetch GitHub repositories");
                Err(FetchError::Repositories)
            }
        }
    }
}

/// Repositories the user authored, in the order received.
pub fn original_projects(repos: &[Repository]) -> Vec<&Repository> {
    repos.iter().filter(|repo| !repo.fork).collect()
}
