// SPDX-License-Identifier: MPL-2.0
//! Image loading port definition.
//!
//! This module defines the [`ImageLoader`] trait the preload cache uses to
//! issue real image requests. Infrastructure adapters implement it against
//! the filesystem and HTTP; tests inject deterministic fakes.

use crate::domain::media::DecodedImage;
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// LoadError
// =============================================================================

/// Reasons an image request can fail.
///
/// These never reach callers of the preload cache; they are logged and the
/// key is marked handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The resource does not exist.
    NotFound,

    /// The resource could not be read.
    Io(String),

    /// The server answered with a non-success status.
    Http {
        /// HTTP status code.
        status: u16,
    },

    /// The bytes could not be decoded as an image.
    Decode(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound => write!(f, "Image not found"),
            LoadError::Io(msg) => write!(f, "I/O error: {msg}"),
            LoadError::Http { status } => write!(f, "HTTP status {status}"),
            LoadError::Decode(msg) => write!(f, "Decode error: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

// =============================================================================
// LoadOutcome
// =============================================================================

/// Terminal result of one image request.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The image decoded; the cache retains it.
    Loaded(DecodedImage),

    /// The request failed; the cache still marks the key handled.
    Failed(LoadError),
}

impl LoadOutcome {
    /// Returns `true` if the image loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }
}

impl From<Result<DecodedImage, LoadError>> for LoadOutcome {
    fn from(result: Result<DecodedImage, LoadError>) -> Self {
        match result {
            Ok(image) => LoadOutcome::Loaded(image),
            Err(err) => LoadOutcome::Failed(err),
        }
    }
}

// =============================================================================
// ImageLoader Trait
// =============================================================================

/// Port for issuing image requests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one loader can back a cache
/// shared across tasks.
///
/// # Contract
///
/// Each call to [`load`](ImageLoader::load) is one underlying request. The
/// returned future must always complete; failures are reported as
/// [`LoadOutcome::Failed`], never by panicking.
pub trait ImageLoader: Send + Sync {
    /// Starts loading the image at `address` (already normalized).
    fn load(&self, address: &str) -> BoxFuture<'static, LoadOutcome>;
}
