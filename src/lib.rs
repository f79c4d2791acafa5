//! folio library
//!
//! Cache-backed GitHub profile and project fetching for a personal portfolio,
//! plus the contact form relay. The `folio` binary is a thin front end.

pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod github;
pub mod relay;
pub mod state;

#[cfg(test)]
mod testing;

pub use error::{Error, FetchError, Result, SubmitError};
