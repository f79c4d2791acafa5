//! Command-line interface parsing for folio
//!
//! Each subcommand drives one portfolio page. With no subcommand the home
//! view (profile followed by projects) is shown.

use clap::{Parser, Subcommand};

use crate::relay::ContactMessage;

/// folio - Portfolio profile, projects, and contact form from the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Show a GitHub portfolio and send contact messages")]
#[command(version)]
pub struct Cli {
    /// GitHub account to show (overrides GITHUB_USERNAME)
    #[arg(long, short, global = true, value_name = "HANDLE")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Profile followed by projects
    Home,
    /// Profile summary
    About,
    /// Project gallery, most recently updated first
    Projects {
        /// Include forked repositories
        #[arg(long)]
        all: bool,
    },
    /// Send a message through the contact relay
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        /// Defaults to "Message from <name>"
        #[arg(long)]
        subject: Option<String>,
    },
}

impl Cli {
    /// Subcommand to run, defaulting to the home view.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Home)
    }

    /// The `--user` value, trimmed. A blank value counts as not given.
    pub fn handle(&self) -> Option<String> {
        self.user
            .as_deref()
            .map(str::trim)
            .filter(|user| !user.is_empty())
            .map(str::to_string)
    }
}

impl Command {
    /// The contact record for a `contact` invocation.
    pub fn contact_message(&self) -> Option<ContactMessage> {
        match self {
            Command::Contact {
                name,
                email,
                message,
                subject,
            } => {
                let record = ContactMessage::new(name, email, message);
                Some(match subject {
                    Some(subject) => record.with_subject(subject),
                    None => record,
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["folio"]);
        assert!(cli.user.is_none());
        assert_eq!(cli.command(), Command::Home);
    }

    #[test]
    fn test_cli_parse_projects_all() {
        let cli = Cli::parse_from(["folio", "projects", "--all", "--user", "octocat"]);
        assert_eq!(cli.command(), Command::Projects { all: true });
        assert_eq!(cli.user.as_deref(), Some("octocat"));
    }

    #[test]
    fn test_cli_parse_contact() {
        let cli = Cli::parse_from([
            "folio", "contact", "--name", "A", "--email", "a@b.com", "--message", "hi",
        ]);
        let record = cli.command().contact_message().unwrap();
        assert_eq!(record, ContactMessage::new("A", "a@b.com", "hi"));
    }

    #[test]
    fn test_blank_user_is_unset() {
        let cli = Cli::parse_from(["folio", "about", "--user", "  "]);
        assert_eq!(cli.handle(), None);

        let cli = Cli::parse_from(["folio", "about", "--user", ""]);
        assert_eq!(cli.handle(), None);

        let cli = Cli::parse_from(["folio", "about", "--user", " octocat "]);
        assert_eq!(cli.handle().as_deref(), Some("octocat"));
    }

    #[test]
    fn test_cli_contact_requires_fields() {
        let result = Cli::try_parse_from(["folio", "contact", "--name", "A"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_contact_message_only_for_contact() {
        assert!(Command::About.contact_message().is_none());
    }
}
