// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod run;
pub mod setup;
pub mod teardown;

use anyhow::Result;
use cws_adapters::{CheStarterClient, EnvPreservePolicy, StaticPreservePolicy, TracedClient};
use cws_core::{RunConfiguration, Workspace};
use cws_engine::{LifecycleController, WaitPolicy};

use crate::exit_error::ExitError;
use crate::output::TeardownReport;

pub(crate) type Controller = LifecycleController<
    TracedClient<CheStarterClient>,
    (EnvPreservePolicy, StaticPreservePolicy),
>;

/// Controller wired to the real starter service.
///
/// `preserve` is the command-line flag; the configured flag and the live
/// environment are consulted as well.
pub(crate) fn build_controller(config: RunConfiguration, preserve: bool) -> Result<Controller> {
    let preserve = StaticPreservePolicy(preserve || config.preserve_requested());
    let client = TracedClient::new(CheStarterClient::new()?);
    Ok(
        LifecycleController::new(config, client, (EnvPreservePolicy::new(), preserve))
            .with_wait_policy(WaitPolicy::from_env()),
    )
}

/// Run `set_up`; on failure, delete anything that was created before
/// reporting the error.
pub(crate) async fn set_up(controller: &mut Controller) -> Result<Workspace> {
    let result = controller.set_up().await.map(Workspace::clone);
    match result {
        Ok(workspace) => Ok(workspace),
        Err(e) => {
            let exit = ExitError::setup(&e);
            let report = TeardownReport::from(&controller.tear_down().await);
            tracing::debug!(outcome = report.outcome, "cleaned up after failed setup");
            Err(exit.into())
        }
    }
}
