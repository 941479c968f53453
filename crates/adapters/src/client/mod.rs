// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace client adapters

mod che;

pub use che::CheStarterClient;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ClientCall, FakeWorkspaceClient};

use async_trait::async_trait;
use cws_core::{AuthCredential, AuthorizationToken, Workspace, WorkspaceStatus};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from workspace client operations
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected response status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("invalid workspace template {path}: {message}")]
    Template { path: PathBuf, message: String },
    #[error("workspace {0} has no REST link")]
    MissingLink(String),
}

/// Remote operations on a single workspace.
///
/// Implementations own every transport detail; callers only see structured
/// results.
#[async_trait]
pub trait WorkspaceClient: Clone + Send + Sync + 'static {
    /// Create a workspace through the starter service
    async fn create_workspace(
        &self,
        starter_url: &str,
        master_url: &str,
        credential: &AuthCredential,
        template: Option<&Path>,
        namespace: Option<&str>,
    ) -> Result<Workspace, ClientError>;

    /// Exchange a master credential for the bearer token used on the
    /// workspace afterwards
    async fn exchange_token(
        &self,
        credential: &AuthCredential,
    ) -> Result<AuthorizationToken, ClientError>;

    /// Current lifecycle status of a workspace
    async fn get_status(
        &self,
        workspace: &Workspace,
        token: &AuthorizationToken,
    ) -> Result<WorkspaceStatus, ClientError>;

    /// Stop a running workspace
    async fn stop_workspace(
        &self,
        workspace: &Workspace,
        token: &AuthorizationToken,
    ) -> Result<(), ClientError>;

    /// Delete a workspace
    async fn delete_workspace(&self, workspace: &Workspace) -> Result<(), ClientError>;
}
