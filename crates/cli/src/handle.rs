// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace handle file shared between `cws setup` and `cws teardown`.
//!
//! The handle is plain JSON. The authorization token is never written.

use cws_core::Workspace;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_HANDLE_PATH: &str = ".cws/workspace.json";

#[derive(Debug, Error)]
pub enum HandleError {
    #[error("failed to access handle file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("corrupt handle file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl HandleError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Write the handle, creating parent directories as needed.
pub fn write(path: &Path, workspace: &Workspace) -> Result<(), HandleError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| HandleError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(workspace).map_err(|source| HandleError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json + "\n").map_err(|e| HandleError::io(path, e))
}

/// Read the handle; `None` when no file exists.
pub fn read(path: &Path) -> Result<Option<Workspace>, HandleError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(HandleError::io(path, e)),
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| HandleError::Json {
            path: path.to_path_buf(),
            source,
        })
}

/// Remove the handle; a missing file is not an error.
pub fn remove(path: &Path) -> Result<(), HandleError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(HandleError::io(path, e)),
    }
}

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;
