// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

pub const LOG_FILE_VAR: &str = "CWS_LOG_FILE";
pub const WORKSPACE_ID_VAR: &str = "CWS_WORKSPACE_ID";
pub const WORKSPACE_ENDPOINT_VAR: &str = "CWS_WORKSPACE_URL";

// --- Logging ---

/// Optional log file, in addition to stderr
pub fn log_file() -> Option<PathBuf> {
    std::env::var(LOG_FILE_VAR)
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
