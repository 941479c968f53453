// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cws-core: data model for the cloud workspace lifecycle controller

pub mod auth;
pub mod config;
pub mod workspace;

pub use auth::{AuthCredential, AuthorizationToken, CredentialKind};
pub use config::{preserve_requested, ConfigLoadError, RunConfiguration};
pub use workspace::{Workspace, WorkspaceId, WorkspaceOrigin, WorkspaceStatus};
