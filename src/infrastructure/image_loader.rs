// SPDX-License-Identifier: MPL-2.0
//! Image loader adapter for site assets.
//!
//! Remote addresses (`http://`, `https://`) are fetched with `reqwest`;
//! anything else is read from disk, relative to an optional assets root.
//! Bytes are decoded with the `image` crate on the blocking pool.

use crate::application::port::{ImageLoader, LoadError, LoadOutcome};
use crate::domain::media::{CacheKey, DecodedImage};
use futures_util::future::{BoxFuture, FutureExt};
use image_rs::GenericImageView;
use std::io;
use std::path::{Path, PathBuf};

/// Loads site images from HTTP or the filesystem.
#[derive(Debug, Clone)]
pub struct SiteImageLoader {
    client: reqwest::Client,
    assets_root: Option<PathBuf>,
}

impl SiteImageLoader {
    /// Creates a loader. Relative paths resolve against `assets_root`
    /// when given, otherwise against the working directory.
    #[must_use]
    pub fn new(assets_root: Option<PathBuf>) -> Self {
        Self {
            client: reqwest::Client::new(),
            assets_root,
        }
    }

    /// Creates a loader sharing an existing HTTP client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, assets_root: Option<PathBuf>) -> Self {
        Self {
            client,
            assets_root,
        }
    }

    fn resolve_path(&self, address: &str) -> PathBuf {
        let stripped = address.strip_prefix("file://").unwrap_or(address);
        let path = Path::new(stripped);
        match &self.assets_root {
            Some(root) if path.is_relative() => root.join(path),
            Some(root) => {
                // Site-absolute addresses ("/images/a.webp") live under the root.
                let relative = path.strip_prefix("/").unwrap_or(path);
                let candidate = root.join(relative);
                if candidate.exists() {
                    candidate
                } else {
                    path.to_path_buf()
                }
            }
            None => path.to_path_buf(),
        }
    }
}

impl Default for SiteImageLoader {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ImageLoader for SiteImageLoader {
    fn load(&self, address: &str) -> BoxFuture<'static, LoadOutcome> {
        let is_remote = CacheKey::normalize(address).is_some_and(|key| key.is_remote());

        if is_remote {
            let request = self.client.get(address).send();
            async move {
                let bytes = match fetch_bytes(request).await {
                    Ok(bytes) => bytes,
                    Err(err) => return LoadOutcome::Failed(err),
                };
                decode_blocking(bytes).await.into()
            }
            .boxed()
        } else {
            let path = self.resolve_path(address);
            async move {
                let bytes = match tokio::fs::read(&path).await {
                    Ok(bytes) => bytes,
                    Err(err) => return LoadOutcome::Failed(map_io_error(&err)),
                };
                decode_blocking(bytes).await.into()
            }
            .boxed()
        }
    }
}

async fn fetch_bytes(
    request: impl std::future::Future<Output = reqwest::Result<reqwest::Response>>,
) -> Result<Vec<u8>, LoadError> {
    let response = request
        .await
        .map_err(|err| LoadError::Io(err.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(LoadError::NotFound);
    }
    if !status.is_success() {
        return Err(LoadError::Http {
            status: status.as_u16(),
        });
    }

    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|err| LoadError::Io(err.to_string()))
}

async fn decode_blocking(bytes: Vec<u8>) -> Result<DecodedImage, LoadError> {
    tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|err| LoadError::Decode(err.to_string()))?
}

/// Decodes encoded image bytes into RGBA pixels.
pub fn decode(bytes: &[u8]) -> Result<DecodedImage, LoadError> {
    let img = image_rs::load_from_memory(bytes).map_err(|e| LoadError::Decode(e.to_string()))?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();
    DecodedImage::new(width, height, pixels)
        .ok_or_else(|| LoadError::Decode("pixel buffer size mismatch".to_string()))
}

fn map_io_error(err: &io::Error) -> LoadError {
    match err.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound,
        _ => LoadError::Io(err.to_string()),
    }
}
