// Cross-post suggestion service.
// Fetches and persists the list of sites available for cross-posting from a
// given site, throttling network re-fetches per site and serving the local
// copy whenever it is fresh enough.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use log::debug;
use tokio::sync::Mutex as AsyncMutex;

use crate::api::{Site, SiteId, Suggestion, XpostsApi};
use crate::cache::SuggestionStore;
use crate::error::{Result, XpostError};

/// Minimum interval between network re-fetches for one site.
pub const THROTTLE_WINDOW: Duration = Duration::from_secs(60);

/// Synchronous connectivity probe consulted before falling back to the
/// network.
pub trait Connectivity {
    fn is_reachable(&self) -> bool;
}

/// Connectivity impl that always reports the network as reachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOnline;

impl Connectivity for AlwaysOnline {
    fn is_reachable(&self) -> bool {
        true
    }
}

/// Fetches and caches cross-post suggestions per site.
///
/// Owns its throttle state rather than sharing a process-wide map; callers
/// hold one instance and pass it where needed. The API client and store are
/// bound per instance; calls against an instance missing either fail with a
/// precondition error once the cached fast path is exhausted.
pub struct SuggestionCache<A, C = AlwaysOnline> {
    api: Option<A>,
    store: Option<SuggestionStore>,
    connectivity: C,
    last_request: Mutex<HashMap<SiteId, Instant>>,
    // One entry per site ever queried, kept for the life of the instance;
    // bounded by the number of sites the host handles.
    in_flight: AsyncMutex<HashMap<SiteId, Arc<AsyncMutex<()>>>>,
}

impl<A: XpostsApi> SuggestionCache<A, AlwaysOnline> {
    pub fn new(api: A, store: SuggestionStore) -> Self {
        Self::with_connectivity(api, store, AlwaysOnline)
    }
}

impl<A: XpostsApi, C: Connectivity> SuggestionCache<A, C> {
    pub fn with_connectivity(api: A, store: SuggestionStore, connectivity: C) -> Self {
        Self {
            api: Some(api),
            store: Some(store),
            connectivity,
            last_request: Mutex::new(HashMap::new()),
            in_flight: AsyncMutex::new(HashMap::new()),
        }
    }

    /// A cache with no API client or store bound. Hosts that wire
    /// dependencies conditionally bind them with [`Self::bind_api`] and
    /// [`Self::bind_store`]; a call that needs a missing dependency fails
    /// with the matching precondition error.
    pub fn unbound(connectivity: C) -> Self {
        Self {
            api: None,
            store: None,
            connectivity,
            last_request: Mutex::new(HashMap::new()),
            in_flight: AsyncMutex::new(HashMap::new()),
        }
    }

    pub fn bind_api(mut self, api: A) -> Self {
        self.api = Some(api);
        self
    }

    pub fn bind_store(mut self, store: SuggestionStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Fetch cached suggestions if fresh, otherwise from the network if the
    /// device is online.
    ///
    /// A site queried within the last [`THROTTLE_WINDOW`] with a non-empty
    /// persisted set is served from the store without a network call.
    /// Concurrent calls for the same site are coalesced: only one fetch runs
    /// and waiters return the freshly persisted set.
    pub async fn suggestions(&self, site: &Site) -> Result<Vec<Suggestion>> {
        // Fast path: fresh cache, no lock contention.
        if let Some(results) = self.fresh_cached(site.id)? {
            return Ok(results);
        }

        let site_lock = self.site_lock(site.id).await;
        let _guard = site_lock.lock().await;

        // A coalesced fetch may have landed while waiting on the site lock.
        if let Some(results) = self.fresh_cached(site.id)? {
            debug!("site {}: coalesced with in-flight fetch", site.id);
            return Ok(results);
        }

        if !self.connectivity.is_reachable() {
            return Err(XpostError::NoResultsAvailable);
        }

        self.mark_requested(site.id);
        self.fetch_and_persist(site).await
    }

    /// Cached result for the site, if the throttle window still covers it and
    /// the persisted set is non-empty.
    fn fresh_cached(&self, site_id: SiteId) -> Result<Option<Vec<Suggestion>>> {
        if !self.requested_recently(site_id) {
            return Ok(None);
        }
        let Some(store) = self.store.as_ref() else {
            return Ok(None);
        };
        let mut results = store.read_suggestions(site_id)?;
        if results.is_empty() {
            return Ok(None);
        }
        sort_by_subdomain(&mut results);
        debug!("site {}: serving {} cached suggestions", site_id, results.len());
        Ok(Some(results))
    }

    async fn fetch_and_persist(&self, site: &Site) -> Result<Vec<Suggestion>> {
        let api = self.api.as_ref().ok_or(XpostError::MissingApiClient)?;
        let store = self.store.as_ref().ok_or(XpostError::MissingStore)?;
        let hostname = site.hostname.as_deref().ok_or(XpostError::MissingHostname)?;

        debug!("site {}: fetching suggestions for {}", site.id, hostname);
        let fetched = api.fetch_xposts(hostname).await?;

        store.replace_all(site.id, &fetched)?;

        let mut persisted = store.read_suggestions(site.id)?;
        if persisted.is_empty() {
            return Err(XpostError::NoResultsAvailable);
        }
        sort_by_subdomain(&mut persisted);
        Ok(persisted)
    }

    fn requested_recently(&self, site_id: SiteId) -> bool {
        self.last_request_map()
            .get(&site_id)
            .is_some_and(|at| at.elapsed() < THROTTLE_WINDOW)
    }

    fn mark_requested(&self, site_id: SiteId) {
        self.last_request_map().insert(site_id, Instant::now());
    }

    fn last_request_map(&self) -> MutexGuard<'_, HashMap<SiteId, Instant>> {
        match self.last_request.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    async fn site_lock(&self, site_id: SiteId) -> Arc<AsyncMutex<()>> {
        let mut locks = self.in_flight.lock().await;
        locks.entry(site_id).or_default().clone()
    }
}

/// Sort suggestions ascending by subdomain, case-sensitive. Entries without
/// a subdomain never compare as less than another entry; they collect at the
/// end.
pub fn sort_by_subdomain(suggestions: &mut [Suggestion]) {
    suggestions.sort_by(|a, b| match (&a.subdomain, &b.subdomain) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
