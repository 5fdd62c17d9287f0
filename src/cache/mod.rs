// Local persistence module.
// Stores suggestion sets and widget site data on the filesystem, keyed by site.

pub mod paths;
pub mod store;

pub use store::{Cached, SuggestionStore};
