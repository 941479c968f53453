// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Credential resolution

use cws_core::{AuthCredential, RunConfiguration};

/// Pick the credential for the whole lifecycle of one workspace.
///
/// A Keycloak token wins over a platform token. Returns `None` when neither
/// is configured.
pub fn resolve_auth(config: &RunConfiguration) -> Option<AuthCredential> {
    match (&config.keycloak_token, &config.platform_token) {
        (Some(token), _) => Some(AuthCredential::Keycloak(token.clone())),
        (None, Some(token)) => Some(AuthCredential::Platform(token.clone())),
        (None, None) => None,
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
