// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Polling loop helper: fixed interval, optional overall deadline.
//!
//! Uses tokio's clock so paused-time tests elapse budgets instantly.

use std::time::Duration;
use tokio::time::Instant;

/// Result of waiting for the next poll tick.
#[derive(Debug, PartialEq, Eq)]
pub enum Tick {
    /// Ready for the next poll iteration.
    Ready,
    /// The deadline was reached.
    Timeout,
}

/// A polling loop helper with interval timing and an optional deadline.
pub struct Poller {
    interval: Duration,
    started: Instant,
    deadline: Option<Instant>,
}

impl Poller {
    /// Create a new poller with the given interval and optional timeout.
    pub fn new(interval: Duration, timeout: Option<Duration>) -> Self {
        let started = Instant::now();
        Self {
            interval,
            started,
            deadline: timeout.map(|t| started + t),
        }
    }

    /// Wait for the next poll tick.
    ///
    /// Returns [`Tick::Ready`] after sleeping for the configured interval.
    /// Returns [`Tick::Timeout`] if the deadline has been reached (checked
    /// both before and after sleeping). The sleep never overshoots the
    /// deadline.
    pub async fn tick(&mut self) -> Tick {
        let now = Instant::now();
        let sleep_for = match self.deadline {
            Some(deadline) if now >= deadline => return Tick::Timeout,
            Some(deadline) => self.interval.min(deadline - now),
            None => self.interval,
        };

        tokio::time::sleep(sleep_for).await;

        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Tick::Timeout,
            _ => Tick::Ready,
        }
    }

    /// Time since the poller was created.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Time left before the deadline (zero once passed); `None` without one.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

#[cfg(test)]
#[path = "poll_tests.rs"]
mod tests;
