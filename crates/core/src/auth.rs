// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Credentials presented to the starter service.
//!
//! Secrets never appear in `Debug` output so handles and credentials can be
//! logged freely.

use std::fmt;

/// Which authentication flow a credential belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    Keycloak,
    Platform,
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialKind::Keycloak => write!(f, "keycloak"),
            CredentialKind::Platform => write!(f, "platform"),
        }
    }
}

/// Credential used to create a workspace.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthCredential {
    /// Keycloak (OpenShift.io) bearer token.
    Keycloak(String),
    /// Platform (OpenShift) service-account token.
    Platform(String),
}

impl AuthCredential {
    pub fn kind(&self) -> CredentialKind {
        match self {
            AuthCredential::Keycloak(_) => CredentialKind::Keycloak,
            AuthCredential::Platform(_) => CredentialKind::Platform,
        }
    }

    pub fn secret(&self) -> &str {
        match self {
            AuthCredential::Keycloak(token) | AuthCredential::Platform(token) => token,
        }
    }
}

impl fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthCredential::{:?}(<redacted>)", self.kind())
    }
}

/// Bearer token for status and stop calls on one workspace.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthorizationToken(String);

impl AuthorizationToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthorizationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthorizationToken(<redacted>)")
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
