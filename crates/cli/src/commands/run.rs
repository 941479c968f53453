// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cws run -- <command> [args]` - run a test command against a fresh workspace

use std::process::ExitStatus;

use anyhow::{bail, Context, Result};
use clap::Args;
use cws_core::{RunConfiguration, Workspace};

use crate::env::{WORKSPACE_ENDPOINT_VAR, WORKSPACE_ID_VAR};
use crate::exit_error::{ExitError, EXIT_FAILURE};
use crate::output::TeardownReport;

/// Conventional exit code after SIGINT
const EXIT_INTERRUPTED: i32 = 130;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Leave the workspace running afterwards
    #[arg(long)]
    pub preserve: bool,

    /// Test command and its arguments
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub command: Vec<String>,
}

pub async fn handle(args: RunArgs, config: RunConfiguration) -> Result<()> {
    let Some((program, program_args)) = args.command.split_first() else {
        bail!("no command given");
    };

    let mut controller = super::build_controller(config, args.preserve)?;
    let workspace = super::set_up(&mut controller).await?;

    let result = run_command(program, program_args, &workspace).await;

    // Teardown never changes the exit code
    let report = TeardownReport::from(&controller.tear_down().await);
    tracing::info!(outcome = report.outcome, "teardown finished");

    match result? {
        0 => Ok(()),
        code => Err(ExitError::new(code, String::new()).into()),
    }
}

async fn run_command(program: &str, args: &[String], workspace: &Workspace) -> Result<i32> {
    let mut command = tokio::process::Command::new(program);
    command
        .args(args)
        .env(WORKSPACE_ID_VAR, workspace.id.as_str())
        .kill_on_drop(true);
    if let Some(url) = workspace.endpoint_url.as_deref() {
        command.env(WORKSPACE_ENDPOINT_VAR, url);
    }

    tracing::info!(program, workspace_id = %workspace.id, "running command");
    let mut child = command
        .spawn()
        .with_context(|| format!("failed to start {}", program))?;

    tokio::select! {
        status = child.wait() => Ok(exit_code(status?)),
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("interrupted, tearing down");
            Ok(EXIT_INTERRUPTED)
        }
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(EXIT_FAILURE)
}
