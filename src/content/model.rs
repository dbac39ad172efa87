// SPDX-License-Identifier: MPL-2.0
//! Plain data describing the site: identity, about page and projects.

use serde::{Deserialize, Serialize};

/// One gallery image of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// A portfolio project, rendered as one panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
}

impl Project {
    /// Image shown at the top of the detail page: the first gallery image,
    /// falling back to the thumbnail.
    #[must_use]
    pub fn hero_image(&self) -> &str {
        self.images
            .first()
            .map(|image| image.src.as_str())
            .filter(|src| !src.trim().is_empty())
            .unwrap_or(self.thumbnail.as_str())
    }

    /// Gallery images after the hero.
    #[must_use]
    pub fn gallery(&self) -> &[ProjectImage] {
        self.images.get(1..).unwrap_or_default()
    }
}

/// Contact details on the about page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub instagram: String,
}

/// About page content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSection {
    /// Portrait image address. Empty when the page has no portrait.
    #[serde(default)]
    pub portrait: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub clients: Vec<String>,
    #[serde(default)]
    pub contact: Contact,
}

/// Site-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub about: AboutSection,
}

/// Previous and next project around a detail page. No wrap-around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent<'a> {
    pub prev: Option<&'a Project>,
    pub next: Option<&'a Project>,
}
