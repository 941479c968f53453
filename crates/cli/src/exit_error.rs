// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes carried through `anyhow`

use cws_engine::SetupError;
use std::fmt;

pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG: i32 = 2;
pub const EXIT_CREATION: i32 = 3;
pub const EXIT_TIMEOUT: i32 = 4;

/// An error that should terminate the process with a specific code.
///
/// An empty message exits silently (e.g. when a wrapped command already
/// reported its own failure).
#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn setup(err: &SetupError) -> Self {
        Self::new(setup_exit_code(err), err.to_string())
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ExitError {}

pub fn setup_exit_code(err: &SetupError) -> i32 {
    match err {
        SetupError::Config(_) => EXIT_CONFIG,
        SetupError::Creation(_) | SetupError::Authorization { .. } => EXIT_CREATION,
        SetupError::Timeout { .. } => EXIT_TIMEOUT,
        SetupError::InvalidState(_) => EXIT_FAILURE,
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
