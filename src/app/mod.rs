// SPDX-License-Identifier: MPL-2.0
//! Application context shared by the views of one site instance.
//!
//! `AppContext` owns the configuration, the site content and the single
//! preload cache. Views borrow it to trigger the asset warm-up and to build
//! a gesture navigator for a project detail page.

use crate::application::port::{IdleHook, ImageLoader};
use crate::config::{self, Config};
use crate::content::SiteContent;
use crate::error::Result;
use crate::infrastructure::SiteImageLoader;
use crate::media::{self, AssetPreloadCache, WarmSchedule};
use crate::panel_navigation::{GestureNavigator, NavigatorSettings};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Root state wiring content, configuration and the preload cache together.
#[derive(Clone)]
pub struct AppContext {
    config: Config,
    content: Arc<SiteContent>,
    cache: AssetPreloadCache,
    idle_hook: Option<Arc<dyn IdleHook>>,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("projects", &self.content.projects.len())
            .field("cache", &self.cache.stats())
            .finish()
    }
}

impl AppContext {
    /// Creates a context that loads images with [`SiteImageLoader`].
    #[must_use]
    pub fn new(config: Config, content: SiteContent) -> Self {
        let loader = SiteImageLoader::new(config.preload.assets_root.clone());
        Self::with_loader(config, content, Arc::new(loader))
    }

    /// Creates a context with a custom image loader.
    #[must_use]
    pub fn with_loader(config: Config, content: SiteContent, loader: Arc<dyn ImageLoader>) -> Self {
        Self {
            config,
            content: Arc::new(content),
            cache: AssetPreloadCache::new(loader),
            idle_hook: None,
        }
    }

    /// Attaches the host's idle hook used to schedule the warm-up.
    #[must_use]
    pub fn with_idle_hook(mut self, hook: Arc<dyn IdleHook>) -> Self {
        self.idle_hook = Some(hook);
        self
    }

    /// Loads settings from `config_dir` (or the default location) and the
    /// content file at `content_path`.
    ///
    /// Relative asset addresses resolve against `assets_root`, then
    /// `[preload] assets_root`, then the content file's directory. A malformed
    /// settings file falls back to defaults and is reported as the returned
    /// warning.
    pub fn load(
        config_dir: Option<PathBuf>,
        assets_root: Option<PathBuf>,
        content_path: &Path,
    ) -> Result<(Self, Option<String>)> {
        let (mut config, warning) = config::load_with_override(config_dir);
        let content = SiteContent::load_from_path(content_path)?;

        if assets_root.is_some() {
            config.preload.assets_root = assets_root;
        } else if config.preload.assets_root.is_none() {
            config.preload.assets_root = content_path.parent().map(Path::to_path_buf);
        }

        tracing::debug!(
            projects = content.projects.len(),
            assets_root = ?config.preload.assets_root,
            "application context loaded"
        );
        Ok((Self::new(config, content), warning))
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    #[must_use]
    pub fn cache(&self) -> &AssetPreloadCache {
        &self.cache
    }

    #[must_use]
    pub fn warm_schedule(&self) -> WarmSchedule {
        WarmSchedule::from_config(&self.config.preload, self.idle_hook.clone())
    }

    /// Starts the background warm-up of every site asset.
    ///
    /// Returns `None` when preloading is disabled. Calling it again is cheap:
    /// every key is already in flight or resolved.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn warm_site_assets(&self) -> Option<JoinHandle<()>> {
        if !self.config.preload.is_enabled() {
            tracing::debug!("asset warm-up disabled");
            return None;
        }
        Some(media::warm_site_assets(
            &self.cache,
            &self.content,
            &self.warm_schedule(),
        ))
    }

    #[must_use]
    pub fn navigator_settings(&self) -> NavigatorSettings {
        NavigatorSettings::from(&self.config.navigation)
    }

    /// Navigator over every project panel, starting at the first.
    #[must_use]
    pub fn navigator(&self) -> GestureNavigator {
        GestureNavigator::new(self.navigator_settings(), self.content.panel_ids().len())
    }

    /// Navigator for the detail page of `slug`, starting at that project.
    ///
    /// Returns `None` for an unknown slug.
    #[must_use]
    pub fn navigator_for(&self, slug: &str) -> Option<GestureNavigator> {
        let index = self.content.project_index(slug)?;
        Some(GestureNavigator::starting_at(
            self.navigator_settings(),
            self.content.panel_ids().len(),
            index,
        ))
    }
}
