// Page view models.
// Select and format the profile and repository fields each portfolio page shows.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};

use crate::data::{DataClient, original_projects};
use crate::github::{GitHubApi, Profile, Repository};

use super::loading::{LoadTicket, LoadingState, PageState};

/// Fields shown on the "about me" page.
#[derive(Debug, Clone, PartialEq)]
pub struct AboutView {
    pub display_name: String,
    pub login: String,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub member_since: i32,
}

impl From<&Profile> for AboutView {
    fn from(profile: &Profile) -> Self {
        Self {
            display_name: profile.display_name().to_string(),
            login: profile.login.clone(),
            avatar_url: profile.avatar_url.clone(),
            bio: profile.bio.clone(),
            location: profile.location.clone(),
            company: profile.company.clone(),
            website: profile.website().map(str::to_string),
            email: profile.email.clone(),
            public_repos: profile.public_repos,
            followers: profile.followers,
            following: profile.following,
            member_since: profile.created_at.year(),
        }
    }
}

impl fmt::Display for AboutView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (@{})", self.display_name, self.login)?;
        if let Some(bio) = &self.bio {
            writeln!(f, "{}", bio)?;
        }
        for (label, value) in [
            ("Location", &self.location),
            ("Company", &self.company),
            ("Website", &self.website),
            ("Email", &self.email),
        ] {
            if let Some(value) = value {
                writeln!(f, "{:<9} {}", format!("{}:", label), value)?;
            }
        }
        write!(
            f,
            "{} repositories | {} followers | {} following | member since {}",
            self.public_repos, self.followers, self.following, self.member_since
        )
    }
}

/// One card in the project gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub name: String,
    pub description: String,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub stars: u64,
    pub forks: u64,
    pub url: String,
    pub homepage: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Repository> for ProjectCard {
    fn from(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| "No description provided.".to_string()),
            language: repo.language.clone(),
            topics: repo.topics.clone(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            url: repo.html_url.clone(),
            homepage: repo.homepage().map(str::to_string),
            updated_at: repo.updated_at,
        }
    }
}

impl fmt::Display for ProjectCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(language) = &self.language {
            write!(f, " [{}]", language)?;
        }
        writeln!(f, "  ★ {}  ⑂ {}", self.stars, self.forks)?;
        writeln!(f, "  {}", self.description)?;
        if !self.topics.is_empty() {
            writeln!(f, "  topics: {}", self.topics.join(", "))?;
        }
        if let Some(homepage) = &self.homepage {
            writeln!(f, "  {}", homepage)?;
        }
        write!(
            f,
            "  {}  (updated {})",
            self.url,
            self.updated_at.format("%Y-%m-%d")
        )
    }
}

/// Build gallery cards, skipping forks unless asked for them.
pub fn project_cards(repos: &[Repository], include_forks: bool) -> Vec<ProjectCard> {
    if include_forks {
        repos.iter().map(ProjectCard::from).collect()
    } else {
        original_projects(repos)
            .into_iter()
            .map(ProjectCard::from)
            .collect()
    }
}

/// The "about me" page.
#[derive(Debug, Default)]
pub struct AboutPage {
    page: PageState<AboutView>,
}

impl AboutPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadingState<AboutView> {
        self.page.state()
    }

    /// Mark the page as loading and hand out the ticket for this request.
    pub fn start(&mut self) -> LoadTicket {
        self.page.begin()
    }

    /// Apply a fetched profile if the request is still current.
    pub fn finish<E: fmt::Display>(
        &mut self,
        ticket: LoadTicket,
        result: Result<impl AsRef<Profile>, E>,
    ) -> bool {
        let view = result.map(|profile| AboutView::from(profile.as_ref()));
        self.page.complete(ticket, view)
    }

    /// Fetch and apply in one step.
    pub async fn load<A: GitHubApi>(&mut self, client: &DataClient<A>, handle: &str) -> bool {
        let ticket = self.start();
        let result = client.fetch_profile(handle).await;
        self.finish(ticket, result)
    }

    pub fn unmount(&mut self) {
        self.page.detach();
    }
}

/// The project gallery page.
#[derive(Debug, Default)]
pub struct ProjectsPage {
    page: PageState<Vec<ProjectCard>>,
    include_forks: bool,
}

impl ProjectsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_forks(mut self, include_forks: bool) -> Self {
        self.include_forks = include_forks;
        self
    }

    pub fn state(&self) -> &LoadingState<Vec<ProjectCard>> {
        self.page.state()
    }

    pub fn start(&mut self) -> LoadTicket {
        self.page.begin()
    }

    pub fn finish<E: fmt::Display>(
        &mut self,
        ticket: LoadTicket,
        result: Result<impl AsRef<Vec<Repository>>, E>,
    ) -> bool {
        let include_forks = self.include_forks;
        let cards = result.map(|repos| project_cards(repos.as_ref(), include_forks));
        self.page.complete(ticket, cards)
    }

    pub async fn load<A: GitHubApi>(&mut self, client: &DataClient<A>, handle: &str) -> bool {
        let ticket = self.start();
        let result = client.fetch_repositories(handle).await;
        self.finish(ticket, result)
    }

    pub fn unmount(&mut self) {
        self.page.detach();
    }
}
