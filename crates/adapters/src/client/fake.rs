// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake workspace client for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ClientError, WorkspaceClient};
use async_trait::async_trait;
use cws_core::{AuthCredential, AuthorizationToken, Workspace, WorkspaceId, WorkspaceStatus};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Recorded client call
#[derive(Debug, Clone, PartialEq)]
pub enum ClientCall {
    Create {
        starter_url: String,
        master_url: String,
        credential: AuthCredential,
        template: Option<PathBuf>,
        namespace: Option<String>,
    },
    ExchangeToken {
        credential: AuthCredential,
    },
    GetStatus {
        workspace_id: WorkspaceId,
        token: AuthorizationToken,
    },
    Stop {
        workspace_id: WorkspaceId,
        token: AuthorizationToken,
    },
    Delete {
        workspace_id: WorkspaceId,
    },
}

struct FakeClientState {
    calls: Vec<ClientCall>,
    statuses: VecDeque<Result<WorkspaceStatus, ClientError>>,
    last_status: Option<Result<WorkspaceStatus, ClientError>>,
    create_error: Option<ClientError>,
    exchange_error: Option<ClientError>,
    stop_error: Option<ClientError>,
    delete_error: Option<ClientError>,
    hang_status: bool,
    next_id: u64,
}

/// Fake workspace client for testing.
///
/// Status replies are scripted; once the script runs out the last reply
/// repeats. With no script every status call reports `RUNNING`.
#[derive(Clone)]
pub struct FakeWorkspaceClient {
    inner: Arc<Mutex<FakeClientState>>,
}

impl Default for FakeWorkspaceClient {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeClientState {
                calls: Vec::new(),
                statuses: VecDeque::new(),
                last_status: None,
                create_error: None,
                exchange_error: None,
                stop_error: None,
                delete_error: None,
                hang_status: false,
                next_id: 0,
            })),
        }
    }
}

impl FakeWorkspaceClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ClientCall> {
        self.inner.lock().calls.clone()
    }

    /// Number of status calls made so far
    pub fn status_call_count(&self) -> usize {
        self.inner
            .lock()
            .calls
            .iter()
            .filter(|c| matches!(c, ClientCall::GetStatus { .. }))
            .count()
    }

    /// Script the replies of successive status calls
    pub fn set_statuses(&self, statuses: Vec<WorkspaceStatus>) {
        self.set_status_replies(statuses.into_iter().map(Ok).collect());
    }

    /// Script status replies including transient failures
    pub fn set_status_replies(&self, replies: Vec<Result<WorkspaceStatus, ClientError>>) {
        let mut inner = self.inner.lock();
        inner.statuses = replies.into();
        inner.last_status = None;
    }

    pub fn fail_create(&self, error: ClientError) {
        self.inner.lock().create_error = Some(error);
    }

    pub fn fail_exchange(&self, error: ClientError) {
        self.inner.lock().exchange_error = Some(error);
    }

    pub fn fail_stop(&self, error: ClientError) {
        self.inner.lock().stop_error = Some(error);
    }

    pub fn fail_delete(&self, error: ClientError) {
        self.inner.lock().delete_error = Some(error);
    }

    /// Make every later status call hang forever (still recorded)
    pub fn hang_status(&self) {
        self.inner.lock().hang_status = true;
    }
}

#[async_trait]
impl WorkspaceClient for FakeWorkspaceClient {
    async fn create_workspace(
        &self,
        starter_url: &str,
        master_url: &str,
        credential: &AuthCredential,
        template: Option<&Path>,
        namespace: Option<&str>,
    ) -> Result<Workspace, ClientError> {
        let mut inner = self.inner.lock();

        inner.calls.push(ClientCall::Create {
            starter_url: starter_url.to_string(),
            master_url: master_url.to_string(),
            credential: credential.clone(),
            template: template.map(Path::to_path_buf),
            namespace: namespace.map(str::to_string),
        });

        if let Some(err) = inner.create_error.clone() {
            return Err(err);
        }

        inner.next_id += 1;
        let id = format!("fake-ws-{}", inner.next_id);
        Ok(Workspace::managed(
            id.clone(),
            Some(format!("fake://ide/{id}")),
            Some(format!("fake://workspace/{id}")),
        ))
    }

    async fn exchange_token(
        &self,
        credential: &AuthCredential,
    ) -> Result<AuthorizationToken, ClientError> {
        let mut inner = self.inner.lock();

        inner.calls.push(ClientCall::ExchangeToken {
            credential: credential.clone(),
        });

        match inner.exchange_error.clone() {
            Some(err) => Err(err),
            None => Ok(AuthorizationToken::new(credential.secret())),
        }
    }

    async fn get_status(
        &self,
        workspace: &Workspace,
        token: &AuthorizationToken,
    ) -> Result<WorkspaceStatus, ClientError> {
        {
            let mut inner = self.inner.lock();

            inner.calls.push(ClientCall::GetStatus {
                workspace_id: workspace.id.clone(),
                token: token.clone(),
            });

            if !inner.hang_status {
                let reply = match inner.statuses.pop_front() {
                    Some(reply) => reply,
                    None => inner
                        .last_status
                        .clone()
                        .unwrap_or(Ok(WorkspaceStatus::Running)),
                };
                inner.last_status = Some(reply.clone());
                return reply;
            }
        }
        std::future::pending().await
    }

    async fn stop_workspace(
        &self,
        workspace: &Workspace,
        token: &AuthorizationToken,
    ) -> Result<(), ClientError> {
        let mut inner = self.inner.lock();

        inner.calls.push(ClientCall::Stop {
            workspace_id: workspace.id.clone(),
            token: token.clone(),
        });

        match inner.stop_error.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn delete_workspace(&self, workspace: &Workspace) -> Result<(), ClientError> {
        let mut inner = self.inner.lock();

        inner.calls.push(ClientCall::Delete {
            workspace_id: workspace.id.clone(),
        });

        match inner.delete_error.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
