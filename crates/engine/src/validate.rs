// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pre-flight validation of the run configuration, before any network call

use crate::auth::resolve_auth;
use crate::error::{ConfigError, ConfigProblem};
use cws_core::{AuthCredential, RunConfiguration};

/// Check that everything needed to create a workspace is present.
///
/// An externally supplied workspace URL bypasses every other requirement.
/// All problems are collected, not just the first.
pub fn validate(config: &RunConfiguration) -> Result<(), ConfigError> {
    if config.workspace_url.is_some() {
        return Ok(());
    }

    let mut problems = Vec::new();
    if config.starter_url.is_none() {
        problems.push(ConfigProblem::MissingStarterUrl);
    }
    if config.master_url.is_none() {
        problems.push(ConfigProblem::MissingMasterUrl);
    }
    if config.keycloak_token.is_none() && config.platform_token.is_none() {
        problems.push(ConfigProblem::MissingCredentials);
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ConfigError { problems })
    }
}

/// Validated inputs for the create call.
#[derive(Debug)]
pub(crate) struct CreationInputs {
    pub starter_url: String,
    pub master_url: String,
    pub credential: AuthCredential,
}

impl CreationInputs {
    pub(crate) fn from_config(config: &RunConfiguration) -> Result<Self, ConfigError> {
        validate(config)?;
        let missing = |problem| ConfigError {
            problems: vec![problem],
        };
        let starter_url = config
            .starter_url
            .clone()
            .ok_or_else(|| missing(ConfigProblem::MissingStarterUrl))?;
        let master_url = config
            .master_url
            .clone()
            .ok_or_else(|| missing(ConfigProblem::MissingMasterUrl))?;
        let credential =
            resolve_auth(config).ok_or_else(|| missing(ConfigProblem::MissingCredentials))?;
        Ok(Self {
            starter_url,
            master_url,
            credential,
        })
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
