//! `cws run` specs against an externally supplied workspace

use crate::prelude::*;

#[test]
fn run_exports_workspace_to_the_command() {
    let temp = Project::empty();

    temp.cws_external()
        .args(&[
            "run",
            "--",
            "sh",
            "-c",
            "echo \"$CWS_WORKSPACE_ID $CWS_WORKSPACE_URL\"",
        ])
        .passes()
        .stdout_eq(&format!("existing {}\n", EXTERNAL_URL));
}

#[test]
fn run_returns_the_command_exit_code() {
    let temp = Project::empty();

    temp.cws_external()
        .args(&["run", "--", "sh", "-c", "exit 3"])
        .exits_with(3)
        .stderr_lacks("Error:");
}

#[test]
fn run_passes_hyphenated_arguments_through() {
    let temp = Project::empty();

    temp.cws_external()
        .args(&["run", "--", "sh", "-c", "echo \"$1\"", "sh", "--verbose"])
        .passes()
        .stdout_eq("--verbose\n");
}

#[test]
fn run_reports_unknown_program() {
    let temp = Project::empty();

    temp.cws_external()
        .args(&["run", "--", "definitely-not-a-real-program-cws"])
        .exits_with(1)
        .stderr_has("failed to start definitely-not-a-real-program-cws");
}

#[test]
fn run_does_not_write_a_handle() {
    let temp = Project::empty();

    temp.cws_external().args(&["run", "--", "true"]).passes();

    assert!(!temp.handle_path().exists());
}
