// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration: an immutable snapshot of everything the controller
//! needs, captured once before setup.
//!
//! Values come from the environment, optionally layered over a TOML file.
//! Environment values win. Empty strings count as absent.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const STARTER_URL_VAR: &str = "CHE_STARTER_URL";
pub const MASTER_URL_VAR: &str = "OPENSHIFT_MASTER_URL";
pub const NAMESPACE_VAR: &str = "OPENSHIFT_NAMESPACE";
pub const WORKSPACE_URL_VAR: &str = "CHE_WORKSPACE_URL";
pub const KEYCLOAK_TOKEN_VAR: &str = "KEYCLOAK_TOKEN";
pub const PLATFORM_TOKEN_VAR: &str = "OPENSHIFT_TOKEN";
pub const PRESERVE_VAR: &str = "CHE_PRESERVE_WORKSPACE";
pub const TEMPLATE_VAR: &str = "CHE_WORKSPACE_TEMPLATE";

/// Errors from loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Inputs for one suite run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfiguration {
    /// Starter service base URL
    pub starter_url: Option<String>,
    /// Platform (OpenShift) master URL
    pub master_url: Option<String>,
    pub namespace: Option<String>,
    /// Pre-existing workspace; bypasses creation and teardown entirely
    pub workspace_url: Option<String>,
    pub keycloak_token: Option<String>,
    pub platform_token: Option<String>,
    /// Raw preserve-on-exit flag as loaded
    pub preserve: Option<String>,
    /// JSON body template for the create request
    pub template: Option<PathBuf>,
}

impl RunConfiguration {
    /// Build a configuration from a key lookup (environment-style names).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            starter_url: get(STARTER_URL_VAR),
            master_url: get(MASTER_URL_VAR),
            namespace: get(NAMESPACE_VAR),
            workspace_url: get(WORKSPACE_URL_VAR),
            keycloak_token: get(KEYCLOAK_TOKEN_VAR),
            platform_token: get(PLATFORM_TOKEN_VAR),
            preserve: get(PRESERVE_VAR),
            template: get(TEMPLATE_VAR).map(PathBuf::from),
        }
    }

    /// Build a configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse a TOML configuration document.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigLoadError> {
        let mut config: Self = toml::from_str(content).map_err(|source| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.drop_empty();
        Ok(config)
    }

    /// Load the optional file, then overlay the process environment.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigLoadError> {
        let base = match file {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
                        path: path.to_path_buf(),
                        source,
                    })?;
                Self::from_toml_str(&content, path)?
            }
            None => Self::default(),
        };
        Ok(base.overlay(Self::from_env()))
    }

    /// Values set in `other` replace values in `self`.
    pub fn overlay(self, other: Self) -> Self {
        Self {
            starter_url: other.starter_url.or(self.starter_url),
            master_url: other.master_url.or(self.master_url),
            namespace: other.namespace.or(self.namespace),
            workspace_url: other.workspace_url.or(self.workspace_url),
            keycloak_token: other.keycloak_token.or(self.keycloak_token),
            platform_token: other.platform_token.or(self.platform_token),
            preserve: other.preserve.or(self.preserve),
            template: other.template.or(self.template),
        }
    }

    /// Whether the configured preserve flag asks to keep the workspace.
    pub fn preserve_requested(&self) -> bool {
        preserve_requested(self.preserve.as_deref())
    }

    fn drop_empty(&mut self) {
        for field in [
            &mut self.starter_url,
            &mut self.master_url,
            &mut self.namespace,
            &mut self.workspace_url,
            &mut self.keycloak_token,
            &mut self.platform_token,
            &mut self.preserve,
        ] {
            if field.as_deref() == Some("") {
                *field = None;
            }
        }
    }
}

/// Preserve flag semantics: case-insensitive `"true"` preserves, anything
/// else (including absence) cleans up.
pub fn preserve_requested(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
