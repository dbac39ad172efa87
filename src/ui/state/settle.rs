// SPDX-License-Identifier: MPL-2.0
//! Settle animation: the timed phase after a gesture ends.
//!
//! A settle moves the panel offset from where the finger left it to its
//! destination (full viewport for a commit, zero for a snap-back) over a
//! fixed duration with an ease-out curve.

use std::time::{Duration, Instant};

/// What happens when the settle finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleKind {
    /// Advance to `target` once the animation ends.
    Commit { target: usize },
    /// Return to rest without changing the panel.
    SnapBack,
}

/// An in-progress settle animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settle {
    kind: SettleKind,
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Settle {
    #[must_use]
    pub fn new(kind: SettleKind, from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            kind,
            from,
            to,
            started_at,
            duration,
        }
    }

    #[must_use]
    pub fn kind(&self) -> SettleKind {
        self.kind
    }

    #[must_use]
    pub fn target_offset(&self) -> f32 {
        self.to
    }

    /// Instant at which the animation completes.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.started_at + self.duration
    }

    /// Time left until completion, zero once finished.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline().saturating_duration_since(now)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.deadline()
    }

    /// Animation progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased offset at `now`.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        let t = ease_out_cubic(self.progress(now));
        self.from + (self.to - self.from) * t
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn settle(duration_ms: u64) -> (Settle, Instant) {
        let start = Instant::now();
        (
            Settle::new(
                SettleKind::SnapBack,
                -40.0,
                0.0,
                start,
                Duration::from_millis(duration_ms),
            ),
            start,
        )
    }

    #[test]
    fn endpoints_are_stable() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn easing_is_monotonic() {
        let a = ease_out_cubic(0.25);
        let b = ease_out_cubic(0.5);
        let c = ease_out_cubic(0.75);
        assert!(a < b && b < c);
    }

    #[test]
    fn offset_interpolates_from_start_to_target() {
        let (settle, start) = settle(300);
        assert_abs_diff_eq!(settle.offset_at(start), -40.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(
            settle.offset_at(start + Duration::from_millis(300)),
            0.0,
            epsilon = F32_EPSILON
        );
        let mid = settle.offset_at(start + Duration::from_millis(150));
        assert!(mid > -40.0 && mid < 0.0);
    }

    #[test]
    fn finished_exactly_at_deadline() {
        let (settle, start) = settle(300);
        assert!(!settle.is_finished(start + Duration::from_millis(299)));
        assert!(settle.is_finished(start + Duration::from_millis(300)));
        assert_eq!(
            settle.remaining(start + Duration::from_millis(100)),
            Duration::from_millis(200)
        );
        assert_eq!(settle.remaining(start + Duration::from_secs(5)), Duration::ZERO);
    }

    #[test]
    fn zero_duration_is_immediately_finished() {
        let (settle, start) = settle(0);
        assert!(settle.is_finished(start));
        assert_eq!(settle.offset_at(start), 0.0);
    }
}
