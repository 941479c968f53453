// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    starting     = { "STARTING",     WorkspaceStatus::Starting },
    running      = { "RUNNING",      WorkspaceStatus::Running },
    lower_case   = { "running",      WorkspaceStatus::Running },
    padded       = { " STOPPED\n",   WorkspaceStatus::Stopped },
    stopping     = { "STOPPING",     WorkspaceStatus::Stopping },
    snapshotting = { "SNAPSHOTTING", WorkspaceStatus::Snapshotting },
    error        = { "ERROR",        WorkspaceStatus::Error },
)]
fn status_parses_known_values(raw: &str, expected: WorkspaceStatus) {
    assert_eq!(WorkspaceStatus::from(raw), expected);
}

#[test]
fn status_keeps_unknown_values_verbatim() {
    let status = WorkspaceStatus::from("PAUSED");
    assert_eq!(status, WorkspaceStatus::Other("PAUSED".to_string()));
    assert_eq!(status.to_string(), "PAUSED");
    assert!(!status.is_running());
}

#[test]
fn only_running_is_ready() {
    assert!(WorkspaceStatus::Running.is_running());
    for status in [
        WorkspaceStatus::Starting,
        WorkspaceStatus::Stopping,
        WorkspaceStatus::Stopped,
        WorkspaceStatus::Snapshotting,
        WorkspaceStatus::Error,
    ] {
        assert!(!status.is_running(), "{status} should not be ready");
    }
}

#[test]
fn status_serializes_as_upper_case_string() {
    let json = serde_json::to_string(&WorkspaceStatus::Running).unwrap();
    assert_eq!(json, "\"RUNNING\"");

    let parsed: WorkspaceStatus = serde_json::from_str("\"starting\"").unwrap();
    assert_eq!(parsed, WorkspaceStatus::Starting);
}

#[test]
fn external_workspace_uses_last_path_segment_as_id() {
    let ws = Workspace::external("https://che.example.com/dev/my-workspace/");
    assert_eq!(ws.id, "my-workspace");
    assert_eq!(
        ws.endpoint_url.as_deref(),
        Some("https://che.example.com/dev/my-workspace/")
    );
    assert_eq!(ws.origin, WorkspaceOrigin::External);
    assert!(!ws.is_managed());
    assert!(ws.authorization_token.is_none());
    assert!(ws.self_link.is_none());
}

#[test]
fn external_workspace_without_path_uses_url_as_id() {
    let ws = Workspace::external("http://localhost:8080");
    assert_eq!(ws.id, "http://localhost:8080");
}

#[test]
fn managed_workspace_is_eligible_for_lifecycle() {
    let ws = Workspace::managed(
        "workspace42",
        Some("https://ide/ws42".to_string()),
        Some("https://api/workspace/workspace42".to_string()),
    );
    assert!(ws.is_managed());
    assert!(ws.authorization_token.is_none());
}

#[test]
fn workspace_token_is_not_serialized() {
    let ws = Workspace::managed("ws-1", None, Some("https://api/ws-1".to_string()))
        .with_token(AuthorizationToken::new("secret-token"));

    let json = serde_json::to_string(&ws).unwrap();
    assert!(!json.contains("secret-token"));

    let restored: Workspace = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.id, ws.id);
    assert_eq!(restored.self_link, ws.self_link);
    assert_eq!(restored.origin, WorkspaceOrigin::Managed);
    assert!(restored.authorization_token.is_none());
}
