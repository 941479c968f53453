// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: the starter service and the preserve signal

pub mod client;
mod env;
pub mod preserve;
pub mod traced;

pub use client::{CheStarterClient, ClientError, WorkspaceClient};
pub use preserve::{EnvPreservePolicy, PreservePolicy, StaticPreservePolicy};
pub use traced::TracedClient;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use client::{ClientCall, FakeWorkspaceClient};
#[cfg(any(test, feature = "test-support"))]
pub use preserve::FakePreservePolicy;
