// Cache path utilities.
// Constructs filesystem paths for the per-site cache hierarchy.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::api::SiteId;

/// Get the default base cache directory (~/.cache/xpost on macOS/Linux).
pub fn default_cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "xpost").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to a site's directory under the cache root.
pub fn site_dir(root: &Path, site_id: SiteId) -> PathBuf {
    root.join("sites").join(site_id.to_string())
}

/// Path to a site's persisted suggestion set.
pub fn suggestions_path(root: &Path, site_id: SiteId) -> PathBuf {
    site_dir(root, site_id).join("suggestions.json")
}

/// Path to the persisted widget site data.
pub fn widget_sites_path(root: &Path) -> PathBuf {
    root.join("widget_sites.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_paths() {
        let root = Path::new("/tmp/xpost-cache");

        let dir = site_dir(root, SiteId(42));
        assert!(dir.ends_with("sites/42"));

        let suggestions = suggestions_path(root, SiteId(42));
        assert!(suggestions.ends_with("sites/42/suggestions.json"));

        let widgets = widget_sites_path(root);
        assert!(widgets.ends_with("widget_sites.json"));
    }
}
