//! Externally supplied workspace specs
//!
//! With CHE_WORKSPACE_URL set, no remote call is ever made: setup publishes
//! the URL as-is and teardown leaves the workspace alone.

use crate::prelude::*;

#[test]
fn setup_publishes_external_workspace() {
    let temp = Project::empty();

    temp.cws_external()
        .args(&["setup"])
        .passes()
        .stdout_eq(&format!(
            "Using external workspace existing\n  endpoint: {}\n",
            EXTERNAL_URL
        ));

    let handle = temp.read(".cws/workspace.json").unwrap();
    assert!(handle.contains("\"origin\": \"external\""), "{handle}");
    assert!(handle.contains(EXTERNAL_URL), "{handle}");
}

#[test]
fn setup_json_output_is_the_handle() {
    let temp = Project::empty();

    let run = temp
        .cws_external()
        .args(&["setup", "-o", "json"])
        .passes();

    let json: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(json["id"], "existing");
    assert_eq!(json["endpoint_url"], EXTERNAL_URL);
    assert_eq!(json["origin"], "external");
}

#[test]
fn external_url_wins_over_missing_settings() {
    let temp = Project::empty();

    // No starter URL, master URL or credentials: still valid
    temp.cws_external().args(&["setup"]).passes();
}

#[test]
fn external_url_from_config_file() {
    let temp = Project::empty();
    temp.file(
        "cws.toml",
        &format!("workspace_url = \"{}\"\n", EXTERNAL_URL),
    );

    temp.cws()
        .args(&["--config", "cws.toml", "setup", "--handle", "state/ws.json"])
        .passes()
        .stdout_has("Using external workspace existing");

    assert!(temp.read("state/ws.json").is_some());
}

#[test]
fn teardown_leaves_external_workspace_alone() {
    let temp = Project::empty();
    temp.cws_external().args(&["setup"]).passes();

    temp.cws_external()
        .args(&["teardown"])
        .passes()
        .stdout_eq("Workspace was supplied externally, leaving it alone\n");

    assert!(!temp.handle_path().exists());
}

#[test]
fn teardown_without_handle_is_a_no_op() {
    let temp = Project::empty();

    temp.cws()
        .args(&["teardown"])
        .passes()
        .stdout_eq("No workspace to tear down\n");
}

#[test]
fn teardown_json_output() {
    let temp = Project::empty();
    temp.cws_external().args(&["setup"]).passes();

    let run = temp
        .cws_external()
        .args(&["teardown", "-o", "json"])
        .passes();

    let json: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(json["outcome"], "external");
    assert_eq!(json["warnings"], serde_json::json!([]));
}
