// SPDX-License-Identifier: MPL-2.0
//! Idle-scheduling port definition.

use futures_util::future::BoxFuture;
use std::time::Duration;

/// Host hook that reports when the environment has spare capacity.
///
/// The returned future completes once the host is idle. It may also complete
/// early when `timeout` elapses; callers bound the wait with `timeout`
/// regardless, so an implementation that ignores it stays correct.
pub trait IdleHook: Send + Sync {
    /// Waits for the host to go idle.
    fn when_idle(&self, timeout: Duration) -> BoxFuture<'static, ()>;
}
