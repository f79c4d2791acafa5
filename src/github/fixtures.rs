// Sample API payloads shared by unit tests.

use chrono::{TimeZone, Utc};

use super::types::{Profile, Repository};

pub fn profile(login: &str) -> Profile {
    Profile {
        login: login.to_string(),
        name: Some("The Octocat".to_string()),
        avatar_url: format!("https://avatars.githubusercontent.com/{}", login),
        html_url: format!("https://github.com/{}", login),
        bio: Some("Mascot".to_string()),
        location: Some("San Francisco".to_string()),
        company: Some("@github".to_string()),
        blog: Some("https://github.blog".to_string()),
        email: None,
        twitter_username: None,
        public_repos: 8,
        followers: 1000,
        following: 9,
        created_at: Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap(),
        updated_at: None,
    }
}

pub fn repository(id: u64, name: &str, fork: bool) -> Repository {
    Repository {
        id,
        name: name.to_string(),
        description: Some(format!("{} description", name)),
        html_url: format!("https://github.com/octocat/{}", name),
        homepage: None,
        language: Some("Rust".to_string()),
        topics: vec!["cli".to_string()],
        stargazers_count: id * 10,
        forks_count: id,
        watchers_count: id * 10,
        default_branch: Some("main".to_string()),
        created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        fork,
    }
}
