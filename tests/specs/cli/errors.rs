//! CLI error handling specs
//!
//! Configuration problems are reported together, before any remote call,
//! with exit code 2.

use crate::prelude::*;

#[test]
fn setup_without_configuration_lists_every_problem() {
    let temp = Project::empty();

    temp.cws()
        .args(&["setup"])
        .exits_with(2)
        .stderr_has("invalid configuration")
        .stderr_has("CHE_STARTER_URL")
        .stderr_has("OPENSHIFT_MASTER_URL")
        .stderr_has("KEYCLOAK_TOKEN")
        .stderr_has("OPENSHIFT_TOKEN");

    assert!(!temp.handle_path().exists());
}

#[test]
fn setup_reports_only_missing_settings() {
    let temp = Project::empty();

    temp.cws()
        .args(&["setup"])
        .env("CHE_STARTER_URL", "https://starter.example.com")
        .env("OPENSHIFT_TOKEN", "oc-token")
        .exits_with(2)
        .stderr_has("OPENSHIFT_MASTER_URL")
        .stderr_lacks("starter URL is not set")
        .stderr_lacks("oc-token");
}

#[test]
fn empty_values_count_as_missing() {
    let temp = Project::empty();

    temp.cws()
        .args(&["setup"])
        .env("CHE_STARTER_URL", "")
        .env("OPENSHIFT_MASTER_URL", "https://master.example.com")
        .env("KEYCLOAK_TOKEN", "kc")
        .exits_with(2)
        .stderr_has("CHE_STARTER_URL");
}

#[test]
fn run_without_configuration_never_starts_the_command() {
    let temp = Project::empty();

    temp.cws()
        .args(&["run", "--", "sh", "-c", "touch started"])
        .exits_with(2);

    assert!(temp.read("started").is_none());
}

#[test]
fn unparsable_config_file_exits_with_config_code() {
    let temp = Project::empty();
    temp.file("cws.toml", "starter_url = [unterminated");

    temp.cws()
        .args(&["--config", "cws.toml", "setup"])
        .exits_with(2)
        .stderr_has("failed to parse config file");
}

#[test]
fn unknown_config_key_is_rejected() {
    let temp = Project::empty();
    temp.file("cws.toml", "startr_url = \"https://starter.example.com\"\n");

    temp.cws()
        .args(&["--config", "cws.toml", "setup"])
        .exits_with(2)
        .stderr_has("startr_url");
}

#[test]
fn missing_config_file_exits_with_config_code() {
    let temp = Project::empty();

    temp.cws()
        .args(&["setup", "--config", "absent.toml"])
        .exits_with(2)
        .stderr_has("failed to read config file");
}
