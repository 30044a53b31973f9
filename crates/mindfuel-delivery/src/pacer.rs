// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-interval pacing between consecutive sends.
//!
//! Pacing exists to avoid overwhelming the mail transport; it is a rate
//! limit, not a retry or synchronization mechanism. Keeping it out of the
//! dispatch loop lets tests disable it without real wall-clock waits.

use std::time::Duration;

/// A fixed-interval gate awaited before each send.
#[derive(Debug, Clone)]
pub struct Pacer {
    interval: Duration,
}

impl Pacer {
    /// A pacer that waits `interval` before every send.
    pub fn fixed(interval: Duration) -> Self {
        Self { interval }
    }

    /// A pacer that waits `secs` seconds before every send.
    pub fn from_secs(secs: u64) -> Self {
        Self::fixed(Duration::from_secs(secs))
    }

    /// A pacer that never waits. Intended for tests.
    pub fn disabled() -> Self {
        Self::fixed(Duration::ZERO)
    }

    /// The configured interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait out the configured interval.
    pub async fn pause(&self) {
        if self.interval.is_zero() {
            return;
        }
        tokio::time::sleep(self.interval).await;
    }
}
