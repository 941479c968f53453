// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Preserve-workspace policy: the operator's opt-out from teardown

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakePreservePolicy;

use cws_core::config::PRESERVE_VAR;
use cws_core::preserve_requested;

/// Decides whether teardown should leave the workspace alone.
///
/// Consulted at teardown time, not cached at setup.
pub trait PreservePolicy: Send + Sync + 'static {
    fn should_preserve(&self) -> bool;
}

/// Reads the preserve flag from the environment on every call.
#[derive(Clone, Debug)]
pub struct EnvPreservePolicy {
    var: String,
}

impl EnvPreservePolicy {
    pub fn new() -> Self {
        Self::with_var(PRESERVE_VAR)
    }

    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvPreservePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl PreservePolicy for EnvPreservePolicy {
    fn should_preserve(&self) -> bool {
        preserve_requested(crate::env::preserve_flag(&self.var).as_deref())
    }
}

/// Fixed answer, e.g. from a CLI flag or a configuration file.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticPreservePolicy(pub bool);

impl PreservePolicy for StaticPreservePolicy {
    fn should_preserve(&self) -> bool {
        self.0
    }
}

/// Either policy says preserve.
impl<A: PreservePolicy, B: PreservePolicy> PreservePolicy for (A, B) {
    fn should_preserve(&self) -> bool {
        self.0.should_preserve() || self.1.should_preserve()
    }
}

#[cfg(test)]
#[path = "preserve_tests.rs"]
mod tests;
