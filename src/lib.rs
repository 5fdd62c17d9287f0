//! Client library for cross-post site suggestions.
//!
//! Fetches the list of sites available for cross-posting from a given site,
//! persists the result locally, and throttles network re-fetches per site.
//! Also provides the persisted widget site data and the auto-upload message
//! catalog used by the host application.

pub mod api;
pub mod cache;
pub mod error;
pub mod posts;
pub mod suggestions;
pub mod widgets;

pub use api::{Site, SiteId, Suggestion, WpComClient, XpostsApi};
pub use cache::SuggestionStore;
pub use error::{Result, XpostError};
pub use suggestions::{AlwaysOnline, Connectivity, SuggestionCache, THROTTLE_WINDOW};
pub use widgets::SitesDataProvider;
