// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::error::ConfigProblem;

fn failure(message: &str) -> ClientError {
    ClientError::Request(message.to_string())
}

#[tokio::test(start_paused = true)]
async fn running_workspace_is_stopped_then_deleted() {
    let (client, _, mut controller) = ready_controller(platform_config()).await;
    let before = client.calls().len();

    let outcome = controller.tear_down().await;

    match outcome {
        TeardownOutcome::Cleaned {
            workspace_id,
            stopped,
        } => {
            assert_eq!(workspace_id, "fake-ws-1");
            assert!(stopped);
        }
        other => panic!("Expected Cleaned, got {:?}", other),
    }
    assert_eq!(
        call_names(&client.calls()[before..]),
        vec!["status", "stop", "delete"]
    );
    assert_eq!(controller.state(), ControllerState::Terminated);
    assert!(controller.workspace().is_none());
}

#[tokio::test(start_paused = true)]
async fn stopped_workspace_is_only_deleted() {
    let (client, _, mut controller) = ready_controller(platform_config()).await;
    client.set_statuses(vec![WorkspaceStatus::Stopped]);
    let before = client.calls().len();

    let outcome = controller.tear_down().await;

    assert!(matches!(outcome, TeardownOutcome::Cleaned { stopped: false, .. }));
    assert_eq!(call_names(&client.calls()[before..]), vec!["status", "delete"]);
}

#[tokio::test(start_paused = true)]
async fn preserved_workspace_is_left_alone() {
    let (client, preserve, mut controller) = ready_controller(platform_config()).await;
    preserve.set(true);
    let before = client.calls().len();

    let outcome = controller.tear_down().await;

    match outcome {
        TeardownOutcome::Preserved { workspace_id } => assert_eq!(workspace_id, "fake-ws-1"),
        other => panic!("Expected Preserved, got {:?}", other),
    }
    assert_eq!(client.calls().len(), before);
}

#[tokio::test(start_paused = true)]
async fn preserve_flag_is_read_at_teardown() {
    let (_, preserve, mut controller) = ready_controller(platform_config()).await;
    assert_eq!(preserve.checks(), 0);

    controller.tear_down().await;

    assert_eq!(preserve.checks(), 1);
}

#[tokio::test(start_paused = true)]
async fn stop_failure_still_deletes() {
    let (client, _, mut controller) = ready_controller(platform_config()).await;
    client.fail_stop(failure("stop refused"));
    let before = client.calls().len();

    let outcome = controller.tear_down().await;

    let errors = outcome.errors();
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], TeardownError::Stop { .. }));
    assert_eq!(
        call_names(&client.calls()[before..]),
        vec!["status", "stop", "delete"]
    );
    assert_eq!(controller.state(), ControllerState::Terminated);
}

#[tokio::test(start_paused = true)]
async fn delete_failure_reports_leak() {
    let (client, _, mut controller) = ready_controller(platform_config()).await;
    client.fail_delete(failure("gone away"));

    let outcome = controller.tear_down().await;

    match &outcome {
        TeardownOutcome::Leaked {
            workspace_id,
            errors,
        } => {
            assert_eq!(workspace_id, &"fake-ws-1");
            assert_eq!(errors.len(), 1);
            assert!(errors[0].to_string().contains("could not delete workspace fake-ws-1"));
        }
        other => panic!("Expected Leaked, got {:?}", other),
    }
    assert_eq!(controller.state(), ControllerState::Terminated);
}

#[tokio::test(start_paused = true)]
async fn status_failure_still_deletes() {
    let (client, _, mut controller) = ready_controller(platform_config()).await;
    client.set_status_replies(vec![Err(failure("no route"))]);
    let before = client.calls().len();

    let outcome = controller.tear_down().await;

    assert!(matches!(outcome.errors(), [TeardownError::Status { .. }]));
    assert_eq!(call_names(&client.calls()[before..]), vec!["status", "delete"]);
}

#[tokio::test(start_paused = true)]
async fn second_teardown_is_a_no_op() {
    let (client, _, mut controller) = ready_controller(platform_config()).await;
    controller.tear_down().await;
    let before = client.calls().len();

    let outcome = controller.tear_down().await;

    assert!(matches!(outcome, TeardownOutcome::NothingToTearDown));
    assert_eq!(client.calls().len(), before);
}

#[tokio::test(start_paused = true)]
async fn teardown_before_setup_is_a_no_op() {
    let (client, preserve, mut controller) = controller(platform_config());

    let outcome = controller.tear_down().await;

    assert!(matches!(outcome, TeardownOutcome::NothingToTearDown));
    assert!(client.calls().is_empty());
    assert_eq!(preserve.checks(), 0);
}

#[tokio::test(start_paused = true)]
async fn adopted_workspace_is_torn_down() {
    let (client, _, mut controller) = controller(keycloak_config());
    let handle = Workspace::managed(
        "ws-from-handle",
        Some("https://che.example.com/ide/ws-from-handle".to_string()),
        Some("https://starter.example.com/workspace/ws-from-handle".to_string()),
    );

    let adopted = controller.adopt(handle).await.unwrap().clone();
    assert_eq!(controller.state(), ControllerState::Ready);
    assert!(adopted.authorization_token.is_some());

    let outcome = controller.tear_down().await;

    assert!(matches!(outcome, TeardownOutcome::Cleaned { stopped: true, .. }));
    assert_eq!(
        call_names(&client.calls()),
        vec!["exchange", "status", "stop", "delete"]
    );
    let secrets = secrets_used(&client.calls());
    assert!(secrets.iter().all(|s| s == "kc-token"), "{secrets:?}");
}

#[tokio::test(start_paused = true)]
async fn adopted_external_handle_is_never_touched() {
    let (client, preserve, mut controller) = controller(platform_config());

    controller
        .adopt(Workspace::external("https://che.example.com/dev/existing"))
        .await
        .unwrap();
    let outcome = controller.tear_down().await;

    assert!(matches!(outcome, TeardownOutcome::External));
    assert!(client.calls().is_empty());
    assert_eq!(preserve.checks(), 0);
}

#[tokio::test(start_paused = true)]
async fn adopt_needs_only_a_credential() {
    let config = RunConfiguration {
        platform_token: Some("oc-token".to_string()),
        ..Default::default()
    };
    let (client, _, mut controller) = controller(config);

    controller
        .adopt(Workspace::managed("ws-from-handle", None, None))
        .await
        .unwrap();
    assert_eq!(controller.credential_kind(), Some(CredentialKind::Platform));

    let outcome = controller.tear_down().await;

    assert!(matches!(outcome, TeardownOutcome::Cleaned { stopped: true, .. }));
    assert_eq!(
        call_names(&client.calls()),
        vec!["exchange", "status", "stop", "delete"]
    );
}

#[tokio::test(start_paused = true)]
async fn adopt_requires_credentials() {
    let config = RunConfiguration {
        platform_token: None,
        ..platform_config()
    };
    let (client, _, mut controller) = controller(config);

    let err = controller
        .adopt(Workspace::managed("ws-1", None, None))
        .await
        .unwrap_err();

    match err {
        SetupError::Config(e) => assert_eq!(e.problems, vec![ConfigProblem::MissingCredentials]),
        other => panic!("Expected Config error, got {:?}", other),
    }
    assert!(client.calls().is_empty());
    assert_eq!(controller.state(), ControllerState::Uninitialized);
}
