// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for workspace setup and teardown

use crate::state::ControllerState;
use cws_adapters::ClientError;
use cws_core::config::{KEYCLOAK_TOKEN_VAR, MASTER_URL_VAR, PLATFORM_TOKEN_VAR, STARTER_URL_VAR};
use cws_core::{WorkspaceId, WorkspaceStatus};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// One missing required setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigProblem {
    MissingStarterUrl,
    MissingMasterUrl,
    MissingCredentials,
}

impl fmt::Display for ConfigProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigProblem::MissingStarterUrl => write!(
                f,
                "starter URL is not set; set {STARTER_URL_VAR} and rerun"
            ),
            ConfigProblem::MissingMasterUrl => write!(
                f,
                "platform master URL is not set; set {MASTER_URL_VAR} and rerun"
            ),
            ConfigProblem::MissingCredentials => write!(
                f,
                "no credentials configured; set either {KEYCLOAK_TOKEN_VAR} or {PLATFORM_TOKEN_VAR} and rerun"
            ),
        }
    }
}

/// Every missing setting, reported together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub problems: Vec<ConfigProblem>,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration")?;
        for problem in &self.problems {
            write!(f, "\n  - {problem}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {}

/// Errors that abort `set_up`
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("workspace creation failed: {0}")]
    Creation(ClientError),
    #[error("authorization for workspace {workspace_id} failed: {source}")]
    Authorization {
        workspace_id: WorkspaceId,
        source: ClientError,
    },
    #[error(
        "workspace {workspace_id} did not reach RUNNING within {}s ({polls} status checks, last status: {})",
        .waited.as_secs(),
        last_status_label(.last_status, .last_error)
    )]
    Timeout {
        workspace_id: WorkspaceId,
        waited: Duration,
        polls: u32,
        last_status: Option<WorkspaceStatus>,
        last_error: Option<ClientError>,
    },
    #[error("set up is not allowed in state {0}")]
    InvalidState(ControllerState),
}

fn last_status_label(status: &Option<WorkspaceStatus>, error: &Option<ClientError>) -> String {
    match (status, error) {
        (Some(status), _) => status.to_string(),
        (None, Some(err)) => format!("unknown ({err})"),
        (None, None) => "unknown".to_string(),
    }
}

/// Problems during best-effort teardown; reported, never escalated
#[derive(Debug, Clone, Error)]
pub enum TeardownError {
    #[error("could not read status of workspace {workspace_id}: {source}")]
    Status {
        workspace_id: WorkspaceId,
        source: ClientError,
    },
    #[error("could not stop workspace {workspace_id}: {source}")]
    Stop {
        workspace_id: WorkspaceId,
        source: ClientError,
    },
    #[error("could not delete workspace {workspace_id}: {source}")]
    Delete {
        workspace_id: WorkspaceId,
        source: ClientError,
    },
}
