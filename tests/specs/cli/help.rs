//! CLI help output specs

use crate::prelude::*;

#[test]
fn cws_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn cws_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("setup")
        .stdout_has("teardown")
        .stdout_has("run");
}

#[test]
fn cws_run_help_shows_usage() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--preserve");
}

#[test]
fn cws_teardown_help_shows_handle_default() {
    cli()
        .args(&["teardown", "--help"])
        .passes()
        .stdout_has(".cws/workspace.json");
}
