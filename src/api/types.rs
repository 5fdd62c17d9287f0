// API and domain types.
// Defines the site identity used for scoping and the suggestion record
// decoded from the xposts endpoint.

use serde::{Deserialize, Serialize};

/// Opaque site key. Scopes throttle entries and persisted suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SiteId(pub u64);

impl std::fmt::Display for SiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A site (blog) the client operates on.
///
/// The hostname is required for network calls; a site without one can still
/// serve cached suggestions but never triggers a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub id: SiteId,
    pub hostname: Option<String>,
}

impl Site {
    pub fn new(id: u64, hostname: impl Into<String>) -> Self {
        Self {
            id: SiteId(id),
            hostname: Some(hostname.into()),
        }
    }

    /// A site with no hostname bound (not connected to the hosted service).
    pub fn unconnected(id: u64) -> Self {
        Self {
            id: SiteId(id),
            hostname: None,
        }
    }
}

/// A site handle recommended for cross-posting.
///
/// One record per entry in the xposts response; the persisted set for a site
/// is replaced wholesale on every successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Sort key. Entries without one sort after all entries that have one.
    #[serde(default)]
    pub subdomain: Option<String>,
    /// Display name.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub site_url: Option<String>,
    /// Site icon URL.
    #[serde(default)]
    pub blavatar: Option<String>,
}

impl Suggestion {
    pub fn new(subdomain: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            subdomain: Some(subdomain.into()),
            title: Some(title.into()),
            site_url: None,
            blavatar: None,
        }
    }
}
