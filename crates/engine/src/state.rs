// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle controller states.
//!
//! ```text
//! Uninitialized -> Creating -> Polling -> Ready -> Stopping -> Deleting -> Terminated
//!       |              |          |                   (Stopping skipped when not running)
//!       |              +----------+--> Failed -> Deleting -> Terminated (orphan cleanup)
//!       +--> External
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Uninitialized,
    Creating,
    Polling,
    Ready,
    Stopping,
    Deleting,
    Terminated,
    /// Externally supplied workspace; never created or torn down
    External,
    /// Creation or the wait for RUNNING failed
    Failed,
}

impl fmt::Display for ControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControllerState::Uninitialized => "UNINITIALIZED",
            ControllerState::Creating => "CREATING",
            ControllerState::Polling => "POLLING",
            ControllerState::Ready => "READY",
            ControllerState::Stopping => "STOPPING",
            ControllerState::Deleting => "DELETING",
            ControllerState::Terminated => "TERMINATED",
            ControllerState::External => "EXTERNAL",
            ControllerState::Failed => "FAILED",
        };
        f.write_str(name)
    }
}
