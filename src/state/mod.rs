// State management module.
// Handles loading state and view models for the portfolio pages.

pub mod loading;
pub mod pages;

pub use loading::{LoadTicket, LoadingState, PageState};
pub use pages::{AboutPage, AboutView, ProjectCard, ProjectsPage, project_cards};
