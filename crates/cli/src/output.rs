// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use cws_core::Workspace;
use cws_engine::TeardownOutcome;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print the workspace published by `set_up`.
pub fn print_workspace(workspace: &Workspace, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let endpoint = workspace.endpoint_url.as_deref().unwrap_or("-");
            if workspace.is_managed() {
                println!("Workspace {} is running", workspace.id);
            } else {
                println!("Using external workspace {}", workspace.id);
            }
            println!("  endpoint: {}", endpoint);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(workspace)?);
        }
    }
    Ok(())
}

/// Flat, serializable view of a [`TeardownOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeardownReport {
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    pub stopped: bool,
    pub warnings: Vec<String>,
}

impl From<&TeardownOutcome> for TeardownReport {
    fn from(outcome: &TeardownOutcome) -> Self {
        let (name, workspace_id, stopped) = match outcome {
            TeardownOutcome::External => ("external", None, false),
            TeardownOutcome::NothingToTearDown => ("nothing", None, false),
            TeardownOutcome::Preserved { workspace_id } => ("preserved", Some(workspace_id), false),
            TeardownOutcome::Cleaned {
                workspace_id,
                stopped,
            } => ("cleaned", Some(workspace_id), *stopped),
            TeardownOutcome::Leaked { workspace_id, .. } => ("leaked", Some(workspace_id), false),
        };
        Self {
            outcome: name,
            workspace_id: workspace_id.map(ToString::to_string),
            stopped,
            warnings: outcome.errors().iter().map(ToString::to_string).collect(),
        }
    }
}

impl TeardownReport {
    /// One-line human summary
    pub fn summary(&self) -> String {
        let id = self.workspace_id.as_deref().unwrap_or("-");
        match self.outcome {
            "external" => "Workspace was supplied externally, leaving it alone".to_string(),
            "preserved" => format!("Preserving workspace {}", id),
            "cleaned" if self.stopped => format!("Stopped and deleted workspace {}", id),
            "cleaned" => format!("Deleted workspace {}", id),
            "leaked" => match self.warnings.len() {
                1 => format!("Workspace {} may have leaked (1 teardown problem)", id),
                n => format!("Workspace {} may have leaked ({} teardown problems)", id, n),
            },
            _ => "No workspace to tear down".to_string(),
        }
    }
}

/// Print a teardown report.
///
/// Text mode prints only the summary; each problem has already been logged
/// at warn level by the controller.
pub fn print_teardown(report: &TeardownReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", report.summary()),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}
