// Cache module for in-memory response caching.
// Keeps recent GitHub API responses so repeated page loads skip the network.

pub mod store;

pub use store::{CachedData, DEFAULT_TTL, ResponseCache};
