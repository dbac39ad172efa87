// SPDX-License-Identifier: MPL-2.0
//! Idle notification driven by the host's event loop.
//!
//! The host calls [`IdleSignal::signal_idle`] whenever its frame or event
//! queue drains. A signal sent before anyone waits is kept, so the next
//! waiter proceeds immediately.

use crate::application::port::IdleHook;
use futures_util::future::{BoxFuture, FutureExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

/// Cloneable idle signal shared between the host loop and the warm-up.
#[derive(Debug, Clone, Default)]
pub struct IdleSignal {
    notify: Arc<Notify>,
}

impl IdleSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the host as idle, waking one waiter.
    pub fn signal_idle(&self) {
        self.notify.notify_one();
    }
}

impl IdleHook for IdleSignal {
    fn when_idle(&self, _timeout: Duration) -> BoxFuture<'static, ()> {
        let notify = Arc::clone(&self.notify);
        async move { notify.notified().await }.boxed()
    }
}
