// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cws teardown` - stop and delete the workspace recorded by `cws setup`

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use cws_core::RunConfiguration;
use cws_engine::TeardownOutcome;

use crate::exit_error::ExitError;
use crate::handle::DEFAULT_HANDLE_PATH;
use crate::output::{print_teardown, OutputFormat, TeardownReport};

#[derive(Args, Debug)]
pub struct TeardownArgs {
    /// Handle file written by `cws setup`
    #[arg(long, value_name = "PATH", default_value = DEFAULT_HANDLE_PATH)]
    pub handle: PathBuf,

    /// Leave the workspace running
    #[arg(long)]
    pub preserve: bool,
}

pub async fn handle(
    args: TeardownArgs,
    config: RunConfiguration,
    format: OutputFormat,
) -> Result<()> {
    let Some(workspace) = crate::handle::read(&args.handle)? else {
        tracing::info!(path = %args.handle.display(), "no workspace handle found");
        return print_teardown(
            &TeardownReport::from(&TeardownOutcome::NothingToTearDown),
            format,
        );
    };

    let mut controller = super::build_controller(config, args.preserve)?;
    if let Err(e) = controller.adopt(workspace).await {
        return Err(ExitError::setup(&e).into());
    }

    let outcome = controller.tear_down().await;
    let report = TeardownReport::from(&outcome);

    // Keep the handle while the workspace may still exist
    if !matches!(
        outcome,
        TeardownOutcome::Preserved { .. } | TeardownOutcome::Leaked { .. }
    ) {
        if let Err(e) = crate::handle::remove(&args.handle) {
            tracing::warn!(error = %e, "failed to remove workspace handle");
        }
    }

    print_teardown(&report, format)
}
