// REST API module for the hosted blogging service.
// Handles authentication, typed endpoints, and response decoding.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::WpComClient;
pub use endpoints::XpostsApi;
pub use types::{Site, SiteId, Suggestion};
