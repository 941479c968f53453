// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! cws - cloud workspace lifecycle for test suites

mod commands;
mod env;
mod exit_error;
mod handle;
mod logging;
mod output;

use output::OutputFormat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{run, setup, teardown};
use cws_core::RunConfiguration;
use exit_error::{ExitError, EXIT_CONFIG};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "cws",
    version,
    about = "Provision a cloud workspace for a test suite and clean it up afterwards"
)]
struct Cli {
    /// TOML configuration file; environment variables take precedence
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a workspace and wait until it is running
    Setup(setup::SetupArgs),
    /// Stop and delete the workspace created by `setup`
    Teardown(teardown::TeardownArgs),
    /// Set up, run a command against the workspace, then tear down
    Run(run::RunArgs),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        let code = e
            .downcast_ref::<ExitError>()
            .map_or(exit_error::EXIT_FAILURE, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// When the top-level message already contains every source message the
/// "Caused by" chain is skipped; otherwise the full chain is rendered.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn load_config(path: Option<&Path>) -> Result<RunConfiguration> {
    RunConfiguration::load(path).map_err(|e| ExitError::new(EXIT_CONFIG, e.to_string()).into())
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let _log_guard = logging::setup_logging()?;
    let config = load_config(cli.config.as_deref())?;

    match command {
        Commands::Setup(args) => setup::handle(args, config, format).await,
        Commands::Teardown(args) => teardown::handle(args, config, format).await,
        Commands::Run(args) => run::handle(args, config).await,
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
