// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace handle and remote lifecycle status.
//!
//! A [`Workspace`] is either supplied externally (its URL came straight from
//! configuration) or managed (created through the starter service). Only
//! managed workspaces may be polled, stopped, or deleted.

use crate::auth::AuthorizationToken;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned to a workspace by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceId(pub String);

impl WorkspaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WorkspaceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for WorkspaceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<&str> for WorkspaceId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Who owns the lifecycle of a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceOrigin {
    /// URL supplied by the operator; never created, polled, stopped or deleted.
    External,
    /// Created through the starter service; eligible for teardown.
    Managed,
}

/// One remote workspace instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    /// Reachable address of the running environment, if known.
    #[serde(default)]
    pub endpoint_url: Option<String>,
    /// REST resource URL used for status, stop and delete calls.
    #[serde(default)]
    pub self_link: Option<String>,
    pub origin: WorkspaceOrigin,
    /// Bearer token bound to this workspace. Never persisted.
    #[serde(skip)]
    pub authorization_token: Option<AuthorizationToken>,
}

impl Workspace {
    /// Workspace created by the starter service.
    pub fn managed(
        id: impl Into<WorkspaceId>,
        endpoint_url: Option<String>,
        self_link: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            endpoint_url,
            self_link,
            origin: WorkspaceOrigin::Managed,
            authorization_token: None,
        }
    }

    /// Workspace whose URL was given directly through configuration.
    ///
    /// The id is the last path segment of the URL (the URL itself when it
    /// has none). No token is attached.
    pub fn external(url: &str) -> Self {
        let trimmed = url.trim_end_matches('/');
        let id = trimmed
            .rsplit('/')
            .next()
            .filter(|seg| !seg.is_empty() && !seg.contains(':'))
            .unwrap_or(trimmed);
        Self {
            id: WorkspaceId::new(id),
            endpoint_url: Some(url.to_string()),
            self_link: None,
            origin: WorkspaceOrigin::External,
            authorization_token: None,
        }
    }

    pub fn is_managed(&self) -> bool {
        self.origin == WorkspaceOrigin::Managed
    }

    pub fn with_token(mut self, token: AuthorizationToken) -> Self {
        self.authorization_token = Some(token);
        self
    }
}

/// Lifecycle state reported by the remote service.
///
/// Only [`WorkspaceStatus::Running`] means ready; everything else is "keep
/// waiting" while polling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkspaceStatus {
    Starting,
    Running,
    Stopping,
    Stopped,
    Snapshotting,
    Error,
    /// A status this client does not know by name.
    Other(String),
}

impl WorkspaceStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, WorkspaceStatus::Running)
    }

    pub fn as_str(&self) -> &str {
        match self {
            WorkspaceStatus::Starting => "STARTING",
            WorkspaceStatus::Running => "RUNNING",
            WorkspaceStatus::Stopping => "STOPPING",
            WorkspaceStatus::Stopped => "STOPPED",
            WorkspaceStatus::Snapshotting => "SNAPSHOTTING",
            WorkspaceStatus::Error => "ERROR",
            WorkspaceStatus::Other(s) => s,
        }
    }
}

impl From<&str> for WorkspaceStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "STARTING" => WorkspaceStatus::Starting,
            "RUNNING" => WorkspaceStatus::Running,
            "STOPPING" => WorkspaceStatus::Stopping,
            "STOPPED" => WorkspaceStatus::Stopped,
            "SNAPSHOTTING" => WorkspaceStatus::Snapshotting,
            "ERROR" => WorkspaceStatus::Error,
            _ => WorkspaceStatus::Other(s.trim().to_string()),
        }
    }
}

impl From<String> for WorkspaceStatus {
    fn from(s: String) -> Self {
        WorkspaceStatus::from(s.as_str())
    }
}

impl From<WorkspaceStatus> for String {
    fn from(status: WorkspaceStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for WorkspaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
