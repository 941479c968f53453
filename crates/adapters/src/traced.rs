// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::client::{ClientError, WorkspaceClient};
use async_trait::async_trait;
use cws_core::{AuthCredential, AuthorizationToken, Workspace, WorkspaceStatus};
use std::path::Path;
use tracing::Instrument;

/// Wrapper that adds tracing to any WorkspaceClient
#[derive(Clone)]
pub struct TracedClient<C> {
    inner: C,
}

impl<C> TracedClient<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait]
impl<C: WorkspaceClient> WorkspaceClient for TracedClient<C> {
    async fn create_workspace(
        &self,
        starter_url: &str,
        master_url: &str,
        credential: &AuthCredential,
        template: Option<&Path>,
        namespace: Option<&str>,
    ) -> Result<Workspace, ClientError> {
        let span = tracing::info_span!(
            "workspace.create",
            starter_url,
            credential = %credential.kind(),
            namespace = namespace.unwrap_or("-"),
        );
        async {
            tracing::info!(master_url, template = ?template, "starting");
            let start = std::time::Instant::now();
            let result = self
                .inner
                .create_workspace(starter_url, master_url, credential, template, namespace)
                .await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(ws) => tracing::info!(workspace_id = %ws.id, elapsed_ms, "workspace created"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "create failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn exchange_token(
        &self,
        credential: &AuthCredential,
    ) -> Result<AuthorizationToken, ClientError> {
        let result = self.inner.exchange_token(credential).await;
        tracing::info_span!("workspace.token", credential = %credential.kind()).in_scope(|| {
            match &result {
                Ok(_) => tracing::debug!("token resolved"),
                Err(e) => tracing::error!(error = %e, "token exchange failed"),
            }
        });
        result
    }

    async fn get_status(
        &self,
        workspace: &Workspace,
        token: &AuthorizationToken,
    ) -> Result<WorkspaceStatus, ClientError> {
        let result = self.inner.get_status(workspace, token).await;
        match &result {
            Ok(status) => tracing::trace!(workspace_id = %workspace.id, %status, "checked"),
            Err(e) => tracing::warn!(workspace_id = %workspace.id, error = %e, "status check failed"),
        }
        result
    }

    async fn stop_workspace(
        &self,
        workspace: &Workspace,
        token: &AuthorizationToken,
    ) -> Result<(), ClientError> {
        let result = self.inner.stop_workspace(workspace, token).await;
        tracing::info_span!("workspace.stop", workspace_id = %workspace.id).in_scope(
            || match &result {
                Ok(()) => tracing::info!("stopped"),
                Err(e) => tracing::error!(error = %e, "stop failed"),
            },
        );
        result
    }

    async fn delete_workspace(&self, workspace: &Workspace) -> Result<(), ClientError> {
        let result = self.inner.delete_workspace(workspace).await;
        tracing::info_span!("workspace.delete", workspace_id = %workspace.id).in_scope(
            || match &result {
                Ok(()) => tracing::info!("deleted"),
                Err(e) => tracing::error!(error = %e, "delete failed"),
            },
        );
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
