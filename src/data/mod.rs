// Data module.
// Cache-backed access to the profile and repository data shown on the portfolio pages.

pub mod client;

pub use client::{
    DataClient, Payload, is_valid_handle, original_projects, profile_key, repos_key,
};
