// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake preserve policy for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::PreservePolicy;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Toggleable preserve policy that counts how often it is consulted
#[derive(Clone, Default)]
pub struct FakePreservePolicy {
    preserve: Arc<AtomicBool>,
    checks: Arc<AtomicUsize>,
}

impl FakePreservePolicy {
    pub fn new(preserve: bool) -> Self {
        let policy = Self::default();
        policy.set(preserve);
        policy
    }

    pub fn set(&self, preserve: bool) {
        self.preserve.store(preserve, Ordering::SeqCst);
    }

    /// Number of times `should_preserve` was called
    pub fn checks(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }
}

impl PreservePolicy for FakePreservePolicy {
    fn should_preserve(&self) -> bool {
        self.checks.fetch_add(1, Ordering::SeqCst);
        self.preserve.load(Ordering::SeqCst)
    }
}
