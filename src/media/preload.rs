// SPDX-License-Identifier: MPL-2.0
//! Deduplicating image preload cache.
//!
//! Warms every site image at most once per process, no matter how many call
//! sites ask for the same address or how concurrently they ask.
//!
//! # Design
//!
//! - **Single-flight**: concurrent requests for one key share one underlying
//!   load and one [`Shared`] completion
//! - **Failure is terminal**: a failed load still marks the key handled, so a
//!   broken asset is never retried and never surfaces to callers
//! - **No eviction**: the working set is bounded by the site's asset count;
//!   decoded images are retained so their bitmaps stay warm
//! - **Eager**: inside a Tokio runtime each new request is driven by a spawned
//!   task, so it completes even if every caller drops its future
//!
//! # Usage
//!
//! ```ignore
//! let cache = AssetPreloadCache::new(Arc::new(loader));
//!
//! // Fire-and-forget
//! let _ = cache.preload("images/hero.webp");
//!
//! // Or wait for a batch to settle
//! cache.preload_all(["a.webp", "b.webp"]).await;
//! ```

use crate::application::port::{ImageLoader, LoadOutcome};
use crate::domain::media::{CacheKey, DecodedImage};
use futures_util::future::{join_all, BoxFuture, FutureExt, Shared};
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};

type SharedLoad = Shared<BoxFuture<'static, ()>>;

/// Statistics about preload cache activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreloadStats {
    /// Underlying loads issued through the loader.
    pub requests_issued: u64,

    /// Requests that joined an already in-flight load.
    pub coalesced: u64,

    /// Loads that produced a decoded image.
    pub loaded: u64,

    /// Loads that failed (still marked handled).
    pub failed: u64,

    /// Keys currently in flight.
    pub in_flight: usize,

    /// Keys that reached a terminal state.
    pub resolved: usize,
}

#[derive(Default)]
struct CacheState {
    /// Keys whose load settled, successfully or not.
    resolved: HashSet<CacheKey>,

    /// Keys with a load in progress. Disjoint from `resolved`.
    in_flight: HashMap<CacheKey, SharedLoad>,

    /// Decoded images kept alive for the lifetime of the cache.
    retained: HashMap<CacheKey, DecodedImage>,

    stats: PreloadStats,
}

impl CacheState {
    fn settle(&mut self, key: CacheKey, outcome: LoadOutcome) {
        self.in_flight.remove(&key);
        match outcome {
            LoadOutcome::Loaded(image) => {
                tracing::debug!(
                    key = %key,
                    width = image.width(),
                    height = image.height(),
                    "image preloaded"
                );
                self.stats.loaded += 1;
                self.retained.insert(key.clone(), image);
            }
            LoadOutcome::Failed(err) => {
                tracing::warn!(key = %key, error = %err, "image preload failed; marking handled");
                self.stats.failed += 1;
            }
        }
        self.resolved.insert(key);
    }
}

/// Future returned by [`AssetPreloadCache::preload`].
///
/// Always resolves to `()`; it never reports an error.
#[must_use = "a Preload does nothing unless awaited or dropped after the cache drives it"]
pub struct Preload {
    pending: Option<SharedLoad>,
}

impl Preload {
    fn ready() -> Self {
        Self { pending: None }
    }

    fn pending(load: SharedLoad) -> Self {
        Self {
            pending: Some(load),
        }
    }

    /// Returns true when the key was already handled at request time.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.pending.is_none()
    }
}

impl Future for Preload {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.pending.as_mut() {
            None => Poll::Ready(()),
            Some(load) => load.poll_unpin(cx),
        }
    }
}

impl std::fmt::Debug for Preload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preload")
            .field("ready", &self.is_ready())
            .finish()
    }
}

/// Single-flight cache of image preloads.
///
/// Cloning is cheap and clones share state, so one cache can be handed to
/// every call site that needs it.
#[derive(Clone)]
pub struct AssetPreloadCache {
    loader: Arc<dyn ImageLoader>,
    state: Arc<Mutex<CacheState>>,
}

impl std::fmt::Debug for AssetPreloadCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetPreloadCache")
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

impl AssetPreloadCache {
    /// Creates an empty cache backed by `loader`.
    #[must_use]
    pub fn new(loader: Arc<dyn ImageLoader>) -> Self {
        Self {
            loader,
            state: Arc::new(Mutex::new(CacheState::default())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Requests `address`, sharing any load already in progress.
    ///
    /// - Empty or whitespace-only addresses resolve immediately.
    /// - Resolved keys (loaded or failed) resolve immediately.
    /// - In-flight keys return the same shared completion every other caller holds.
    /// - Otherwise one new load is issued.
    pub fn preload(&self, address: &str) -> Preload {
        let Some(key) = CacheKey::normalize(address) else {
            return Preload::ready();
        };

        let mut state = self.lock();
        if state.resolved.contains(&key) {
            return Preload::ready();
        }

        if let Some(load) = state.in_flight.get(&key) {
            let load = load.clone();
            state.stats.coalesced += 1;
            tracing::trace!(key = %key, "joined in-flight preload");
            return Preload::pending(load);
        }

        let request = self.loader.load(key.as_str());
        let cache_state = Arc::clone(&self.state);
        let settle_key = key.clone();
        let load: SharedLoad = async move {
            let outcome = request.await;
            cache_state
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .settle(settle_key, outcome);
        }
        .boxed()
        .shared();

        tracing::debug!(key = %key, "issuing preload");
        state.in_flight.insert(key, load.clone());
        state.stats.requests_issued += 1;
        drop(state);

        if let Ok(runtime) = tokio::runtime::Handle::try_current() {
            runtime.spawn(load.clone());
        }

        Preload::pending(load)
    }

    /// Requests every address and completes once all of them have settled.
    ///
    /// Requests are issued before this returns; the future only waits.
    pub fn preload_all<I, S>(&self, addresses: I) -> impl Future<Output = ()> + Send + 'static
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pending: Vec<Preload> = addresses
            .into_iter()
            .map(|address| self.preload(address.as_ref()))
            .collect();

        async move {
            join_all(pending).await;
        }
    }

    /// Returns true if `address` reached a terminal state.
    #[must_use]
    pub fn is_resolved(&self, address: &str) -> bool {
        CacheKey::normalize(address).is_some_and(|key| self.lock().resolved.contains(&key))
    }

    /// Returns true if `address` has a load in progress.
    #[must_use]
    pub fn is_in_flight(&self, address: &str) -> bool {
        CacheKey::normalize(address).is_some_and(|key| self.lock().in_flight.contains_key(&key))
    }

    /// Returns the retained image for `address`, if it loaded successfully.
    #[must_use]
    pub fn retained(&self, address: &str) -> Option<DecodedImage> {
        let key = CacheKey::normalize(address)?;
        self.lock().retained.get(&key).cloned()
    }

    /// Total bytes held by retained images.
    #[must_use]
    pub fn retained_bytes(&self) -> usize {
        self.lock()
            .retained
            .values()
            .map(DecodedImage::size_bytes)
            .sum()
    }

    /// Returns a snapshot of cache statistics.
    #[must_use]
    pub fn stats(&self) -> PreloadStats {
        let state = self.lock();
        PreloadStats {
            in_flight: state.in_flight.len(),
            resolved: state.resolved.len(),
            ..state.stats
        }
    }
}
