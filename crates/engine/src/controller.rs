// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace lifecycle controller.
//!
//! `set_up` blocks until the workspace is RUNNING (or fails closed);
//! `tear_down` stops and deletes it on a best-effort basis. Externally
//! supplied workspaces are never touched.

use crate::auth::resolve_auth;
use crate::error::{ConfigError, ConfigProblem, SetupError, TeardownError};
use crate::poll::{Poller, Tick};
use crate::state::ControllerState;
use crate::validate::CreationInputs;
use cws_adapters::{ClientError, PreservePolicy, WorkspaceClient};
use cws_core::{
    AuthCredential, AuthorizationToken, CredentialKind, RunConfiguration, Workspace, WorkspaceId,
    WorkspaceStatus,
};
use std::time::Duration;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(300);

/// How long to wait for RUNNING, and how often to ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }
}

impl WaitPolicy {
    /// Defaults overridden by `CWS_POLL_INTERVAL_MS` / `CWS_WAIT_TIMEOUT_MS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            poll_interval: crate::env::poll_interval().unwrap_or(defaults.poll_interval),
            timeout: crate::env::wait_timeout().unwrap_or(defaults.timeout),
        }
    }
}

/// What `tear_down` did.
#[derive(Debug)]
pub enum TeardownOutcome {
    /// Externally supplied workspace; teardown is forbidden
    External,
    /// No workspace was ever provisioned, or it was already torn down
    NothingToTearDown,
    /// Preserve flag set; workspace left running
    Preserved { workspace_id: WorkspaceId },
    /// Stop (when running) and delete both succeeded
    Cleaned {
        workspace_id: WorkspaceId,
        stopped: bool,
    },
    /// Cleanup was attempted but something failed; the workspace may leak
    Leaked {
        workspace_id: WorkspaceId,
        errors: Vec<TeardownError>,
    },
}

impl TeardownOutcome {
    pub fn errors(&self) -> &[TeardownError] {
        match self {
            TeardownOutcome::Leaked { errors, .. } => errors,
            _ => &[],
        }
    }
}

/// Drives one workspace through its lifecycle for a single suite run.
pub struct LifecycleController<C, P> {
    config: RunConfiguration,
    client: C,
    preserve: P,
    wait: WaitPolicy,
    state: ControllerState,
    credential: Option<AuthCredential>,
    /// Published handle (READY or EXTERNAL)
    workspace: Option<Workspace>,
    /// Created but never became ready; cleaned up at teardown, never published
    orphan: Option<Workspace>,
}

impl<C: WorkspaceClient, P: PreservePolicy> LifecycleController<C, P> {
    pub fn new(config: RunConfiguration, client: C, preserve: P) -> Self {
        Self {
            config,
            client,
            preserve,
            wait: WaitPolicy::default(),
            state: ControllerState::Uninitialized,
            credential: None,
            workspace: None,
            orphan: None,
        }
    }

    pub fn with_wait_policy(mut self, wait: WaitPolicy) -> Self {
        self.wait = wait;
        self
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// The ready (or external) workspace, once published.
    pub fn workspace(&self) -> Option<&Workspace> {
        self.workspace.as_ref()
    }

    /// Credential kind chosen for the managed workspace.
    pub fn credential_kind(&self) -> Option<CredentialKind> {
        self.credential.as_ref().map(AuthCredential::kind)
    }

    pub fn config(&self) -> &RunConfiguration {
        &self.config
    }

    /// Provision the workspace and wait until it is RUNNING.
    pub async fn set_up(&mut self) -> Result<&Workspace, SetupError> {
        if self.state != ControllerState::Uninitialized {
            return Err(SetupError::InvalidState(self.state));
        }

        if let Some(url) = self.config.workspace_url.as_deref() {
            tracing::info!(url, "using externally supplied workspace");
            let workspace = Workspace::external(url);
            self.transition(ControllerState::External);
            return Ok(&*self.workspace.insert(workspace));
        }

        let inputs = CreationInputs::from_config(&self.config)?;
        let credential = inputs.credential.clone();
        tracing::info!(credential = %credential.kind(), "creating workspace");

        self.transition(ControllerState::Creating);
        let created = self
            .client
            .create_workspace(
                &inputs.starter_url,
                &inputs.master_url,
                &credential,
                self.config.template.as_deref(),
                self.config.namespace.as_deref(),
            )
            .await;
        let workspace = match created {
            Ok(ws) => ws,
            Err(e) => {
                self.transition(ControllerState::Failed);
                return Err(SetupError::Creation(e));
            }
        };
        tracing::info!(workspace_id = %workspace.id, "workspace created");
        self.credential = Some(credential.clone());

        self.transition(ControllerState::Polling);
        let token = match self.client.exchange_token(&credential).await {
            Ok(token) => token,
            Err(source) => {
                let workspace_id = workspace.id.clone();
                self.fail_with_orphan(workspace);
                return Err(SetupError::Authorization {
                    workspace_id,
                    source,
                });
            }
        };
        let workspace = workspace.with_token(token.clone());

        tracing::info!(workspace_id = %workspace.id, "waiting until workspace starts");
        match self.wait_until_running(&workspace, &token).await {
            Ok(()) => {
                self.transition(ControllerState::Ready);
                Ok(&*self.workspace.insert(workspace))
            }
            Err(e) => {
                self.fail_with_orphan(workspace);
                Err(e)
            }
        }
    }

    /// Adopt a workspace provisioned by an earlier `set_up` (e.g. in another
    /// process) so it can be torn down.
    ///
    /// Re-resolves the credential from the same configuration; only a
    /// credential is required and no status call is made.
    pub async fn adopt(&mut self, workspace: Workspace) -> Result<&Workspace, SetupError> {
        if self.state != ControllerState::Uninitialized {
            return Err(SetupError::InvalidState(self.state));
        }

        if self.config.workspace_url.is_some() || !workspace.is_managed() {
            tracing::info!(workspace_id = %workspace.id, "adopting externally supplied workspace");
            self.transition(ControllerState::External);
            return Ok(&*self.workspace.insert(workspace));
        }

        let credential = resolve_auth(&self.config).ok_or_else(|| ConfigError {
            problems: vec![ConfigProblem::MissingCredentials],
        })?;
        let token = self
            .client
            .exchange_token(&credential)
            .await
            .map_err(|source| SetupError::Authorization {
                workspace_id: workspace.id.clone(),
                source,
            })?;
        self.credential = Some(credential);

        tracing::info!(workspace_id = %workspace.id, "adopted workspace");
        self.transition(ControllerState::Ready);
        Ok(&*self.workspace.insert(workspace.with_token(token)))
    }

    /// Stop and delete the workspace unless it is external or preserved.
    ///
    /// Never fails: problems are collected into [`TeardownOutcome::Leaked`].
    pub async fn tear_down(&mut self) -> TeardownOutcome {
        let target = match self.state {
            ControllerState::External => {
                tracing::info!("workspace was supplied externally, skipping teardown");
                return TeardownOutcome::External;
            }
            ControllerState::Ready => self.workspace.clone(),
            ControllerState::Failed => self.orphan.clone(),
            _ => None,
        };
        let Some(workspace) = target else {
            tracing::debug!(state = %self.state, "nothing to tear down");
            return TeardownOutcome::NothingToTearDown;
        };

        if self.preserve.should_preserve() {
            tracing::info!(
                workspace_id = %workspace.id,
                "preserve flag is set, skipping workspace deletion"
            );
            return TeardownOutcome::Preserved {
                workspace_id: workspace.id,
            };
        }

        let mut errors = Vec::new();
        let mut stopped = false;

        match workspace.authorization_token.as_ref() {
            Some(token) => match self.client.get_status(&workspace, token).await {
                Ok(WorkspaceStatus::Running) => {
                    self.transition(ControllerState::Stopping);
                    tracing::info!(workspace_id = %workspace.id, "stopping workspace");
                    match self.client.stop_workspace(&workspace, token).await {
                        Ok(()) => stopped = true,
                        Err(source) => errors.push(TeardownError::Stop {
                            workspace_id: workspace.id.clone(),
                            source,
                        }),
                    }
                }
                Ok(status) => {
                    tracing::info!(workspace_id = %workspace.id, %status, "workspace not running, skipping stop");
                }
                Err(source) => errors.push(TeardownError::Status {
                    workspace_id: workspace.id.clone(),
                    source,
                }),
            },
            None => {
                tracing::warn!(workspace_id = %workspace.id, "no authorization token, skipping stop");
            }
        }

        self.transition(ControllerState::Deleting);
        tracing::info!(workspace_id = %workspace.id, "deleting workspace");
        if let Err(source) = self.client.delete_workspace(&workspace).await {
            errors.push(TeardownError::Delete {
                workspace_id: workspace.id.clone(),
                source,
            });
        }

        self.workspace = None;
        self.orphan = None;
        self.transition(ControllerState::Terminated);

        if errors.is_empty() {
            TeardownOutcome::Cleaned {
                workspace_id: workspace.id,
                stopped,
            }
        } else {
            for error in &errors {
                tracing::warn!(error = %error, "teardown problem");
            }
            tracing::warn!(workspace_id = %workspace.id, "workspace may have leaked");
            TeardownOutcome::Leaked {
                workspace_id: workspace.id,
                errors,
            }
        }
    }

    /// Poll until RUNNING or the wait budget is spent.
    ///
    /// Status call errors are transient: logged and retried within the same
    /// budget.
    async fn wait_until_running(
        &self,
        workspace: &Workspace,
        token: &AuthorizationToken,
    ) -> Result<(), SetupError> {
        let mut poller = Poller::new(self.wait.poll_interval, Some(self.wait.timeout));
        let mut polls: u32 = 0;
        let mut last_status: Option<WorkspaceStatus> = None;
        let mut last_error: Option<ClientError> = None;

        loop {
            polls += 1;
            match self.status_within(&poller, workspace, token).await {
                Ok(status) if status.is_running() => {
                    let elapsed_ms = poller.elapsed().as_millis() as u64;
                    tracing::info!(workspace_id = %workspace.id, polls, elapsed_ms, "workspace is running");
                    return Ok(());
                }
                Ok(status) => {
                    tracing::debug!(workspace_id = %workspace.id, %status, polls, "workspace not running yet");
                    last_status = Some(status);
                    last_error = None;
                }
                Err(e) => {
                    tracing::warn!(workspace_id = %workspace.id, polls, error = %e, "status check failed, retrying");
                    last_error = Some(e);
                }
            }

            if poller.tick().await == Tick::Timeout {
                tracing::error!(
                    workspace_id = %workspace.id,
                    polls,
                    timeout_ms = self.wait.timeout.as_millis() as u64,
                    "workspace did not start in time"
                );
                return Err(SetupError::Timeout {
                    workspace_id: workspace.id.clone(),
                    waited: poller.elapsed(),
                    polls,
                    last_status,
                    last_error,
                });
            }
        }
    }

    /// One status call, cut off when the wait budget runs out.
    async fn status_within(
        &self,
        poller: &Poller,
        workspace: &Workspace,
        token: &AuthorizationToken,
    ) -> Result<WorkspaceStatus, ClientError> {
        let call = self.client.get_status(workspace, token);
        let Some(remaining) = poller.remaining() else {
            return call.await;
        };
        match tokio::time::timeout(remaining, call).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::Request(format!(
                "status check still pending after {}ms",
                remaining.as_millis()
            ))),
        }
    }

    fn fail_with_orphan(&mut self, workspace: Workspace) {
        tracing::warn!(
            workspace_id = %workspace.id,
            "workspace was created but is not usable; it will be deleted at teardown"
        );
        self.orphan = Some(workspace);
        self.transition(ControllerState::Failed);
    }

    fn transition(&mut self, next: ControllerState) {
        tracing::debug!(from = %self.state, to = %next, "state transition");
        self.state = next;
    }
}

#[cfg(test)]
#[path = "controller_tests/mod.rs"]
mod tests;
