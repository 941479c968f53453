// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Workspace lifecycle engine: validation, credential choice, the wait for
//! RUNNING, and teardown

mod auth;
mod controller;
pub mod env;
mod error;
mod poll;
mod state;
mod validate;

pub use auth::resolve_auth;
pub use controller::{LifecycleController, TeardownOutcome, WaitPolicy};
pub use error::{ConfigError, ConfigProblem, SetupError, TeardownError};
pub use poll::{Poller, Tick};
pub use state::ControllerState;
pub use validate::validate;
