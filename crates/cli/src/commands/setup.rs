// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cws setup` - provision a workspace and wait until it is running

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use cws_core::RunConfiguration;

use crate::handle::DEFAULT_HANDLE_PATH;
use crate::output::{print_workspace, OutputFormat, TeardownReport};

#[derive(Args, Debug)]
pub struct SetupArgs {
    /// Where to write the workspace handle for `cws teardown`
    #[arg(long, value_name = "PATH", default_value = DEFAULT_HANDLE_PATH)]
    pub handle: PathBuf,
}

pub async fn handle(args: SetupArgs, config: RunConfiguration, format: OutputFormat) -> Result<()> {
    let mut controller = super::build_controller(config, false)?;
    let workspace = super::set_up(&mut controller).await?;

    if let Err(e) = crate::handle::write(&args.handle, &workspace) {
        // Nobody could tear it down later without the handle
        let report = TeardownReport::from(&controller.tear_down().await);
        tracing::debug!(outcome = report.outcome, "cleaned up after handle write failure");
        return Err(e.into());
    }
    tracing::debug!(path = %args.handle.display(), "wrote workspace handle");

    print_workspace(&workspace, format)
}
