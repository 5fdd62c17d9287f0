// Widget data provider.
// Exposes the persisted per-site widget data as a site list for the home
// screen widget, with a configured default site and icon fallback.

use serde::{Deserialize, Serialize};

use crate::cache::SuggestionStore;

/// Name of the bundled icon used when a site has none.
pub const DEFAULT_ICON: &str = "blavatar-default";

/// Per-site data persisted for the home screen widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSiteData {
    pub site_name: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Icon for a widget site entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetIcon {
    /// Remote icon to load.
    Url(String),
    /// Bundled fallback asset.
    Default,
}

/// A site entry shown by the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSite {
    pub identifier: String,
    pub display: String,
    pub subtitle: Option<String>,
    pub icon: WidgetIcon,
}

/// Provides the site list for the home screen widget from persisted data.
pub struct SitesDataProvider {
    sites: Vec<WidgetSite>,
    default_site_id: Option<u64>,
}

impl SitesDataProvider {
    /// Load the provider from the store. Missing or unreadable widget data
    /// yields an empty site list rather than an error; the widget renders
    /// its placeholder state instead.
    pub fn load(store: &SuggestionStore, default_site_id: Option<u64>) -> Self {
        let data = store.read_widget_sites().unwrap_or_default();

        let mut entries: Vec<(u64, WidgetSiteData)> = data.into_iter().collect();
        entries.sort_by_key(|(id, _)| *id);

        let sites = entries
            .into_iter()
            .map(|(id, data)| WidgetSite {
                identifier: id.to_string(),
                display: data.site_name,
                subtitle: None,
                icon: data.icon_url.map_or(WidgetIcon::Default, WidgetIcon::Url),
            })
            .collect();

        Self {
            sites,
            default_site_id,
        }
    }

    pub fn sites(&self) -> &[WidgetSite] {
        &self.sites
    }

    /// The configured default site, if it is present in the persisted data.
    pub fn default_site(&self) -> Option<&WidgetSite> {
        let id = self.default_site_id?.to_string();
        self.sites.iter().find(|site| site.identifier == id)
    }
}
