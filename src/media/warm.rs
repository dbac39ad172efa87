// SPDX-License-Identifier: MPL-2.0
//! Site-wide image warm-up.
//!
//! Collects every asset address from the site content and preloads them in
//! the background once the host is idle. The caller is never blocked.

use crate::application::port::IdleHook;
use crate::config::{PreloadConfig, DEFAULT_FALLBACK_DELAY_MS, DEFAULT_IDLE_TIMEOUT_MS};
use crate::content::SiteContent;
use crate::media::preload::AssetPreloadCache;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// When a warm-up may start.
#[derive(Clone)]
pub struct WarmSchedule {
    /// Host idle hook; `None` falls back to a fixed delay.
    pub idle_hook: Option<Arc<dyn IdleHook>>,

    /// Upper bound on the wait for the idle hook.
    pub idle_timeout: Duration,

    /// Delay used when no idle hook exists.
    pub fallback_delay: Duration,
}

impl std::fmt::Debug for WarmSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WarmSchedule")
            .field("idle_hook", &self.idle_hook.is_some())
            .field("idle_timeout", &self.idle_timeout)
            .field("fallback_delay", &self.fallback_delay)
            .finish()
    }
}

impl Default for WarmSchedule {
    fn default() -> Self {
        Self {
            idle_hook: None,
            idle_timeout: Duration::from_millis(DEFAULT_IDLE_TIMEOUT_MS),
            fallback_delay: Duration::from_millis(DEFAULT_FALLBACK_DELAY_MS),
        }
    }
}

impl WarmSchedule {
    /// Builds a schedule from the `[preload]` config section.
    #[must_use]
    pub fn from_config(config: &PreloadConfig, idle_hook: Option<Arc<dyn IdleHook>>) -> Self {
        Self {
            idle_hook,
            idle_timeout: config.idle_timeout(),
            fallback_delay: config.fallback_delay(),
        }
    }

    /// Waits until the warm-up is allowed to start.
    ///
    /// With a hook, waits for it but never longer than `idle_timeout`.
    /// Without one, waits `fallback_delay` (yielding once when it is zero).
    pub async fn wait(&self) {
        match &self.idle_hook {
            Some(hook) => {
                let idle = hook.when_idle(self.idle_timeout);
                if tokio::time::timeout(self.idle_timeout, idle).await.is_err() {
                    tracing::debug!(timeout = ?self.idle_timeout, "idle wait timed out; warming anyway");
                }
            }
            None if self.fallback_delay.is_zero() => tokio::task::yield_now().await,
            None => tokio::time::sleep(self.fallback_delay).await,
        }
    }
}

/// Spawns `task` to run once `schedule` allows it.
///
/// # Panics
///
/// Panics if called outside a Tokio runtime.
pub fn schedule_when_idle<F>(schedule: &WarmSchedule, task: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let schedule = schedule.clone();
    tokio::spawn(async move {
        schedule.wait().await;
        task.await
    })
}

/// Preloads every image the site references, in the background.
///
/// Idempotent: a second call issues no new loads because every key is
/// already in flight or resolved. Awaiting the handle waits for the whole
/// batch to settle; dropping it leaves the warm-up running.
///
/// # Panics
///
/// Panics if called outside a Tokio runtime.
pub fn warm_site_assets(
    cache: &AssetPreloadCache,
    content: &SiteContent,
    schedule: &WarmSchedule,
) -> JoinHandle<()> {
    let addresses = content.asset_addresses();
    let cache = cache.clone();

    schedule_when_idle(schedule, async move {
        tracing::info!(assets = addresses.len(), "warming site assets");
        cache.preload_all(addresses).await;
        let stats = cache.stats();
        tracing::info!(
            resolved = stats.resolved,
            failed = stats.failed,
            "site assets warm"
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::ImageLoader;
    use crate::infrastructure::IdleSignal;
    use crate::test_utils::FakeImageLoader;

    fn content() -> SiteContent {
        SiteContent::from_toml_str(
            r#"
[site.about]
portrait = "portrait.webp"

[[projects]]
id = "1"
title = "A"
slug = "a"
thumbnail = "a.webp"
images = [{ src = "a.webp" }, { src = "a-2.webp" }]
"#,
        )
        .expect("content should parse")
    }

    #[tokio::test]
    async fn warm_preloads_every_asset() {
        let loader = Arc::new(FakeImageLoader::new());
        let cache = AssetPreloadCache::new(Arc::clone(&loader) as Arc<dyn ImageLoader>);

        warm_site_assets(&cache, &content(), &WarmSchedule::default())
            .await
            .expect("warm task should not panic");

        assert_eq!(loader.total_calls(), 3);
        for address in ["portrait.webp", "a.webp", "a-2.webp"] {
            assert!(cache.is_resolved(address));
        }
    }

    #[tokio::test]
    async fn second_warm_issues_no_requests() {
        let loader = Arc::new(FakeImageLoader::new());
        let cache = AssetPreloadCache::new(Arc::clone(&loader) as Arc<dyn ImageLoader>);
        let content = content();

        warm_site_assets(&cache, &content, &WarmSchedule::default())
            .await
            .expect("first warm");
        let after_first = loader.total_calls();

        warm_site_assets(&cache, &content, &WarmSchedule::default())
            .await
            .expect("second warm");

        assert_eq!(loader.total_calls(), after_first);
    }

    #[tokio::test]
    async fn overlapping_warms_share_in_flight_loads() {
        let loader = Arc::new(FakeImageLoader::gated());
        let cache = AssetPreloadCache::new(Arc::clone(&loader) as Arc<dyn ImageLoader>);
        let content = content();

        let first = warm_site_assets(&cache, &content, &WarmSchedule::default());
        let second = warm_site_assets(&cache, &content, &WarmSchedule::default());
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;

        loader.release();
        first.await.expect("first warm");
        second.await.expect("second warm");

        assert_eq!(loader.total_calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn warm_waits_for_idle_signal() {
        let loader = Arc::new(FakeImageLoader::new());
        let cache = AssetPreloadCache::new(Arc::clone(&loader) as Arc<dyn ImageLoader>);
        let signal = IdleSignal::new();
        let schedule = WarmSchedule {
            idle_hook: Some(Arc::new(signal.clone())),
            idle_timeout: Duration::from_secs(60),
            fallback_delay: Duration::ZERO,
        };

        let handle = warm_site_assets(&cache, &content(), &schedule);
        tokio::task::yield_now().await;
        assert_eq!(loader.total_calls(), 0);

        signal.signal_idle();
        handle.await.expect("warm task");
        assert_eq!(loader.total_calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn idle_timeout_bounds_the_wait() {
        let loader = Arc::new(FakeImageLoader::new());
        let cache = AssetPreloadCache::new(Arc::clone(&loader) as Arc<dyn ImageLoader>);
        let schedule = WarmSchedule {
            idle_hook: Some(Arc::new(IdleSignal::new())),
            idle_timeout: Duration::from_millis(1500),
            fallback_delay: Duration::ZERO,
        };

        // Paused clock auto-advances to the timeout once the task is blocked.
        warm_site_assets(&cache, &content(), &schedule)
            .await
            .expect("warm task");
        assert_eq!(loader.total_calls(), 3);
    }

    #[tokio::test]
    async fn scheduled_task_returns_its_output() {
        let handle = schedule_when_idle(&WarmSchedule::default(), async { 7 });
        assert_eq!(handle.await.expect("task"), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn fallback_delay_defers_the_warm() {
        let loader = Arc::new(FakeImageLoader::new());
        let cache = AssetPreloadCache::new(Arc::clone(&loader) as Arc<dyn ImageLoader>);
        let schedule = WarmSchedule {
            idle_hook: None,
            idle_timeout: Duration::from_millis(1500),
            fallback_delay: Duration::from_millis(200),
        };

        let handle = warm_site_assets(&cache, &content(), &schedule);
        tokio::task::yield_now().await;
        assert_eq!(loader.total_calls(), 0);

        handle.await.expect("warm task");
        assert_eq!(loader.total_calls(), 3);
    }
}
