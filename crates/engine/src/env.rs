// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the engine crate.

use std::time::Duration;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Interval between status checks while waiting for RUNNING (default: 5000ms).
pub fn poll_interval() -> Option<Duration> {
    parse_duration_ms("CWS_POLL_INTERVAL_MS")
}

/// Overall budget for the wait for RUNNING (default: 300000ms).
pub fn wait_timeout() -> Option<Duration> {
    parse_duration_ms("CWS_WAIT_TIMEOUT_MS")
}
