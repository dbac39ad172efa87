// SPDX-License-Identifier: MPL-2.0
//! Test utilities: float assertions and a deterministic image loader.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::application::port::{ImageLoader, LoadError, LoadOutcome};
use crate::domain::media::DecodedImage;
use futures_util::future::{BoxFuture, FutureExt};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-4;

/// Loader that records every request and resolves deterministically.
///
/// A gated loader holds every request until [`release`](Self::release).
#[derive(Debug, Default)]
pub struct FakeImageLoader {
    calls: Mutex<HashMap<String, usize>>,
    failing: HashSet<String>,
    gate: Option<Arc<Semaphore>>,
}

impl FakeImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Semaphore::new(0))),
            ..Self::default()
        }
    }

    pub fn failing<I, S>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.failing.extend(addresses.into_iter().map(Into::into));
        self
    }

    /// Lets every held and future request complete.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.close();
        }
    }

    pub fn call_count(&self, address: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(address)
            .copied()
            .unwrap_or_default()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

impl ImageLoader for FakeImageLoader {
    fn load(&self, address: &str) -> BoxFuture<'static, LoadOutcome> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(address.to_string())
            .or_default() += 1;

        let fails = self.failing.contains(address);
        let gate = self.gate.clone();
        async move {
            if let Some(gate) = gate {
                // Closing the semaphore is the release signal.
                let _ = gate.acquire().await;
            }
            if fails {
                LoadOutcome::Failed(LoadError::NotFound)
            } else {
                LoadOutcome::Loaded(
                    DecodedImage::new(2, 2, vec![255; 16]).expect("2x2 RGBA buffer"),
                )
            }
        }
        .boxed()
    }
}
