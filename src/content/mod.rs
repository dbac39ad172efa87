// SPDX-License-Identifier: MPL-2.0
//! Static site content: projects, about page and blur placeholders.
//!
//! Content is read once from a TOML file and consumed read-only: the preload
//! cache takes its asset addresses and the gesture navigator takes its panel
//! count from the project list.
//!
//! # Format
//!
//! ```toml
//! [site]
//! name = "Jane Doe"
//!
//! [site.about]
//! portrait = "images/portrait.webp"
//!
//! [placeholders]
//! Timbertunes = "data:image/webp;base64,..."
//!
//! [[projects]]
//! id = "1"
//! title = "TIMBER TUNES"
//! slug = "timber-tunes"
//! thumbnail = "images/Timbertunes.webp"
//! images = [{ src = "images/Timbertunes.webp", alt = "Street view" }]
//! ```

mod model;

pub use model::{AboutSection, Adjacent, Contact, Project, ProjectImage, SiteConfig};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Everything the site renders, as plain data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub projects: Vec<Project>,

    /// Blur placeholder data URLs keyed by an image name fragment.
    #[serde(default)]
    pub placeholders: BTreeMap<String, String>,
}

impl SiteContent {
    /// Parses and validates content from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let content: SiteContent = toml::from_str(text)
            .map_err(|err| Error::Content(format!("invalid content file: {err}")))?;
        content.validate()?;
        Ok(content)
    }

    /// Loads and validates content from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let content = Self::from_toml_str(&text)?;
        tracing::info!(
            path = %path.display(),
            projects = content.projects.len(),
            "site content loaded"
        );
        Ok(content)
    }

    /// Rejects duplicate project ids and slugs.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for project in &self.projects {
            if !ids.insert(project.id.as_str()) {
                return Err(Error::Content(format!("duplicate project id `{}`", project.id)));
            }
            if !slugs.insert(project.slug.as_str()) {
                return Err(Error::Content(format!(
                    "duplicate project slug `{}`",
                    project.slug
                )));
            }
        }
        Ok(())
    }

    /// Finds a project by its URL slug.
    #[must_use]
    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.slug == slug)
    }

    /// Position of a project in the panel order.
    #[must_use]
    pub fn project_index(&self, slug: &str) -> Option<usize> {
        self.projects.iter().position(|project| project.slug == slug)
    }

    /// Neighbours of a project. Both are `None` for an unknown slug.
    #[must_use]
    pub fn adjacent_projects(&self, slug: &str) -> Adjacent<'_> {
        let Some(index) = self.project_index(slug) else {
            return Adjacent {
                prev: None,
                next: None,
            };
        };
        Adjacent {
            prev: index.checked_sub(1).and_then(|i| self.projects.get(i)),
            next: self.projects.get(index + 1),
        }
    }

    /// Panel identifiers in display order.
    #[must_use]
    pub fn panel_ids(&self) -> Vec<&str> {
        self.projects.iter().map(|project| project.id.as_str()).collect()
    }

    /// Every image address the site references, de-duplicated in first-seen
    /// order: the portrait, then each project's thumbnail and gallery.
    /// Blank addresses are skipped.
    #[must_use]
    pub fn asset_addresses(&self) -> Vec<String> {
        let candidates = std::iter::once(self.site.about.portrait.as_str()).chain(
            self.projects.iter().flat_map(|project| {
                std::iter::once(project.thumbnail.as_str())
                    .chain(project.images.iter().map(|image| image.src.as_str()))
            }),
        );

        let mut seen = HashSet::new();
        candidates
            .filter(|address| !address.trim().is_empty())
            .filter(|address| seen.insert(*address))
            .map(str::to_string)
            .collect()
    }

    /// Blur placeholder for an image: the first placeholder whose name occurs
    /// in the address. Built asset names carry hashes, hence the substring match.
    #[must_use]
    pub fn blur_placeholder(&self, address: &str) -> Option<&str> {
        self.placeholders
            .iter()
            .find(|(name, _)| !name.is_empty() && address.contains(name.as_str()))
            .map(|(_, data_url)| data_url.as_str())
    }
}
