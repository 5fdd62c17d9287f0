// Suggestion store backed by the local filesystem.
// Handles JSON serialization and atomic replace-on-write semantics: a site's
// suggestion set is purged and rewritten as one unit of work, so a failure
// partway leaves the previous set intact.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::api::{SiteId, Suggestion};
use crate::error::Result;

use super::paths;

/// Envelope for persisted data with a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cached<T> {
    /// The persisted data.
    pub data: T,
    /// When the data was written.
    pub cached_at: DateTime<Utc>,
}

impl<T> Cached<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }
}

/// Per-site persistence for suggestion sets and widget data.
pub struct SuggestionStore {
    root: PathBuf,
}

impl SuggestionStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store at the platform cache directory, if one is available.
    pub fn default_location() -> Option<Self> {
        paths::default_cache_dir().map(Self::new)
    }

    /// Read the persisted suggestion envelope for a site.
    pub fn read(&self, site_id: SiteId) -> Result<Option<Cached<Vec<Suggestion>>>> {
        read_json(&paths::suggestions_path(&self.root, site_id))
    }

    /// Read the persisted suggestions for a site, empty when nothing is stored.
    pub fn read_suggestions(&self, site_id: SiteId) -> Result<Vec<Suggestion>> {
        Ok(self.read(site_id)?.map(|cached| cached.data).unwrap_or_default())
    }

    /// Replace all persisted suggestions for a site.
    ///
    /// Delete-then-insert as one transaction: the new set lands via temp file
    /// and rename, which purges the old set and installs the new one in a
    /// single step.
    pub fn replace_all(&self, site_id: SiteId, suggestions: &[Suggestion]) -> Result<()> {
        debug!(
            "replacing {} persisted suggestions for site {}",
            suggestions.len(),
            site_id
        );
        write_json(
            &paths::suggestions_path(&self.root, site_id),
            &Cached::new(suggestions.to_vec()),
        )
    }

    /// Delete all persisted suggestions for a site.
    pub fn purge(&self, site_id: SiteId) -> Result<()> {
        let path = paths::suggestions_path(&self.root, site_id);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Read the persisted widget site data, empty when nothing is stored.
    pub fn read_widget_sites(&self) -> Result<HashMap<u64, crate::widgets::WidgetSiteData>> {
        let cached: Option<Cached<HashMap<u64, crate::widgets::WidgetSiteData>>> =
            read_json(&paths::widget_sites_path(&self.root))?;
        Ok(cached.map(|c| c.data).unwrap_or_default())
    }

    /// Replace the persisted widget site data.
    pub fn write_widget_sites(
        &self,
        sites: &HashMap<u64, crate::widgets::WidgetSiteData>,
    ) -> Result<()> {
        write_json(&paths::widget_sites_path(&self.root), &Cached::new(sites))
    }
}

/// Read JSON data from a cache file.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let value: T = serde_json::from_str(&contents)?;
    Ok(Some(value))
}

/// Write JSON data to a cache file.
fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(data)?;

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, SuggestionStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = SuggestionStore::new(temp_dir.path());
        (temp_dir, store)
    }

    #[test]
    fn test_replace_and_read() {
        let (_dir, store) = store();
        let site = SiteId(1);

        let suggestions = vec![
            Suggestion::new("alpha", "Alpha"),
            Suggestion::new("beta", "Beta"),
        ];
        store.replace_all(site, &suggestions).unwrap();

        let read = store.read_suggestions(site).unwrap();
        assert_eq!(read, suggestions);

        let envelope = store.read(site).unwrap().unwrap();
        assert_eq!(envelope.data, suggestions);
    }

    #[test]
    fn test_replace_purges_previous_set() {
        let (_dir, store) = store();
        let site = SiteId(1);

        store
            .replace_all(site, &[Suggestion::new("old", "Old")])
            .unwrap();
        let fresh = vec![Suggestion::new("new", "New")];
        store.replace_all(site, &fresh).unwrap();

        assert_eq!(store.read_suggestions(site).unwrap(), fresh);
    }

    #[test]
    fn test_read_absent_site_is_empty() {
        let (_dir, store) = store();

        assert!(store.read(SiteId(99)).unwrap().is_none());
        assert!(store.read_suggestions(SiteId(99)).unwrap().is_empty());
    }

    #[test]
    fn test_sites_are_scoped_independently() {
        let (_dir, store) = store();

        store
            .replace_all(SiteId(1), &[Suggestion::new("one", "One")])
            .unwrap();
        store
            .replace_all(SiteId(2), &[Suggestion::new("two", "Two")])
            .unwrap();

        assert_eq!(
            store.read_suggestions(SiteId(1)).unwrap(),
            vec![Suggestion::new("one", "One")]
        );
        assert_eq!(
            store.read_suggestions(SiteId(2)).unwrap(),
            vec![Suggestion::new("two", "Two")]
        );
    }

    #[test]
    fn test_purge() {
        let (_dir, store) = store();
        let site = SiteId(1);

        store
            .replace_all(site, &[Suggestion::new("gone", "Gone")])
            .unwrap();
        store.purge(site).unwrap();

        assert!(store.read_suggestions(site).unwrap().is_empty());

        // Purging an absent site is not an error
        store.purge(SiteId(404)).unwrap();
    }
}
