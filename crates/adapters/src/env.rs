// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

use std::time::Duration;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Per-request HTTP timeout for starter calls (default: 30000ms).
pub fn http_timeout() -> Duration {
    parse_duration_ms("CWS_HTTP_TIMEOUT_MS").unwrap_or(Duration::from_secs(30))
}

/// Raw preserve flag, read fresh on every call.
pub fn preserve_flag(var: &str) -> Option<String> {
    std::env::var(var).ok()
}
