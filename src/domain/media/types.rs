// SPDX-License-Identifier: MPL-2.0
//! Media value types shared by the preload cache and its loaders.

use std::fmt;
use std::sync::Arc;

// =============================================================================
// CacheKey
// =============================================================================

/// Normalized address of an image resource.
///
/// Normalization only trims surrounding whitespace, so `" a.webp "` and
/// `"a.webp"` share one cache entry. An address that is empty after trimming
/// has no key.
///
/// # Example
///
/// ```
/// use folio::domain::media::CacheKey;
///
/// let key = CacheKey::normalize("  images/hero.webp\n").unwrap();
/// assert_eq!(key.as_str(), "images/hero.webp");
/// assert!(CacheKey::normalize("   ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(Arc<str>);

impl CacheKey {
    /// Normalizes a raw address, returning `None` when nothing is left.
    #[must_use]
    pub fn normalize(address: &str) -> Option<Self> {
        let trimmed = address.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(Arc::from(trimmed)))
        }
    }

    /// Returns the normalized address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for `http://` and `https://` addresses.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        let lower = self.0.to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// DecodedImage
// =============================================================================

/// Decoded image kept alive by the cache so the bitmap stays warm.
///
/// Pixel data is shared, so clones are cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl DecodedImage {
    /// Creates a decoded image from dimensions and RGBA pixel data.
    ///
    /// Returns `None` if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Option<Self> {
        let expected_len = (width as usize) * (height as usize) * 4;
        if rgba_bytes.len() != expected_len {
            return None;
        }
        Some(Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
        })
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA pixel data (4 bytes per pixel).
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Size of the retained bitmap in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.rgba_bytes.len()
    }
}
