//! folio - personal portfolio from the terminal
//!
//! Shows a GitHub profile and project gallery and sends contact messages
//! through EmailJS. Exits with status 1 when a page ends in an error state.

use std::fmt::Display;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio::cache::ResponseCache;
use folio::cli::{Cli, Command};
use folio::config::Config;
use folio::data::DataClient;
use folio::github::GitHubClient;
use folio::relay::{ContactService, EmailJsClient};
use folio::state::{AboutPage, LoadingState, ProjectsPage};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Print a loaded page, or its error message. Returns whether it loaded.
fn render<T>(state: &LoadingState<T>, show: impl Fn(&T)) -> bool {
    match state {
        LoadingState::Loaded(data) => {
            show(data);
            true
        }
        LoadingState::Error(message) => {
            eprintln!("{}", message);
            false
        }
        LoadingState::Idle | LoadingState::Loading => false,
    }
}

fn print_all<T: Display>(items: &[T]) {
    if items.is_empty() {
        println!("No projects to show.");
    }
    for item in items {
        println!("{}\n", item);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_env();
    let handle = cli
        .handle()
        .unwrap_or_else(|| config.github_username.clone());
    let command = cli.command();

    let ok = if let Some(record) = command.contact_message() {
        let relay = EmailJsClient::new(&config.emailjs_api_base, config.email.clone())
            .context("Failed to create email relay client")?;
        let outcome = ContactService::new(Arc::new(relay)).submit(&record).await;
        if outcome.success {
            println!("{}", outcome.message);
        } else {
            eprintln!("{}", outcome.message);
        }
        outcome.success
    } else {
        let api = GitHubClient::new(&config.github_api_base)
            .context("Failed to create GitHub client")?;
        let cache = Arc::new(ResponseCache::with_ttl(config.cache_ttl));
        let client = DataClient::new(Arc::new(api), cache);

        let mut about = AboutPage::new();
        let mut projects = ProjectsPage::new()
            .with_forks(matches!(command, Command::Projects { all: true }));

        match command {
            Command::About => {
                about.load(&client, &handle).await;
                render(about.state(), |view| println!("{}", view))
            }
            Command::Projects { .. } => {
                projects.load(&client, &handle).await;
                render(projects.state(), |cards| print_all(cards))
            }
            _ => {
                tokio::join!(about.load(&client, &handle), projects.load(&client, &handle));
                let about_ok = render(about.state(), |view| println!("{}\n", view));
                let projects_ok = render(projects.state(), |cards| print_all(cards));
                about_ok && projects_ok
            }
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
