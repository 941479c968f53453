// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::error::ConfigProblem;
use cws_core::WorkspaceOrigin;
use std::path::PathBuf;

#[tokio::test(start_paused = true)]
async fn external_workspace_makes_no_calls() {
    let (client, preserve, mut controller) = controller(external_config());

    let workspace = controller.set_up().await.unwrap().clone();
    assert_eq!(workspace.origin, WorkspaceOrigin::External);
    assert_eq!(
        workspace.endpoint_url.as_deref(),
        Some("https://che.example.com/dev/existing")
    );
    assert!(workspace.authorization_token.is_none());
    assert_eq!(controller.state(), ControllerState::External);

    let outcome = controller.tear_down().await;
    assert!(matches!(outcome, TeardownOutcome::External));
    assert!(client.calls().is_empty());
    assert_eq!(preserve.checks(), 0);
}

#[tokio::test(start_paused = true)]
async fn external_workspace_skips_validation() {
    let config = RunConfiguration {
        workspace_url: Some("https://che.example.com/dev/existing".to_string()),
        ..Default::default()
    };
    let (client, _, mut controller) = controller(config);

    assert!(controller.set_up().await.is_ok());
    assert!(client.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn ready_after_exactly_three_polls() {
    let (client, _, mut controller) = controller(platform_config());
    client.set_statuses(vec![
        WorkspaceStatus::Starting,
        WorkspaceStatus::Starting,
        WorkspaceStatus::Running,
    ]);

    let workspace = controller.set_up().await.unwrap().clone();

    assert_eq!(controller.state(), ControllerState::Ready);
    assert_eq!(client.status_call_count(), 3);
    assert_eq!(
        call_names(&client.calls()),
        vec!["create", "exchange", "status", "status", "status"]
    );
    assert_eq!(controller.workspace(), Some(&workspace));
    assert!(workspace.is_managed());
    assert!(workspace.authorization_token.is_some());
}

#[tokio::test(start_paused = true)]
async fn keycloak_token_wins_and_is_used_everywhere() {
    let (client, _, mut controller) = controller(keycloak_config());
    client.set_statuses(vec![WorkspaceStatus::Starting, WorkspaceStatus::Running]);

    controller.set_up().await.unwrap();
    assert_eq!(controller.credential_kind(), Some(CredentialKind::Keycloak));

    client.set_statuses(vec![WorkspaceStatus::Running]);
    controller.tear_down().await;

    let calls = client.calls();
    assert!(matches!(
        &calls[0],
        ClientCall::Create {
            credential: AuthCredential::Keycloak(_),
            ..
        }
    ));
    let secrets = secrets_used(&calls);
    assert_eq!(secrets.len(), 6, "create, exchange, 2 polls, status, stop");
    assert!(secrets.iter().all(|s| s == "kc-token"), "{secrets:?}");
}

#[tokio::test(start_paused = true)]
async fn platform_token_used_without_keycloak() {
    let (client, _, mut controller) = controller(platform_config());

    controller.set_up().await.unwrap();
    controller.tear_down().await;

    assert_eq!(controller.credential_kind(), Some(CredentialKind::Platform));
    let secrets = secrets_used(&client.calls());
    assert!(!secrets.is_empty());
    assert!(secrets.iter().all(|s| s == "oc-token"), "{secrets:?}");
}

#[tokio::test(start_paused = true)]
async fn create_call_forwards_configuration() {
    let config = RunConfiguration {
        template: Some(PathBuf::from("/tmp/ws-template.json")),
        ..platform_config()
    };
    let (client, _, mut controller) = controller(config);

    controller.set_up().await.unwrap();

    match &client.calls()[0] {
        ClientCall::Create {
            starter_url,
            master_url,
            template,
            namespace,
            ..
        } => {
            assert_eq!(starter_url, "https://starter.example.com");
            assert_eq!(master_url, "https://master.example.com:8443");
            assert_eq!(template, &Some(PathBuf::from("/tmp/ws-template.json")));
            assert_eq!(namespace.as_deref(), Some("dev-che"));
        }
        other => panic!("Expected Create call, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn never_running_times_out_without_publishing() {
    let (client, _, mut controller) = controller(platform_config());
    client.set_statuses(vec![WorkspaceStatus::Starting]);

    let err = controller.set_up().await.unwrap_err();

    match &err {
        SetupError::Timeout {
            workspace_id,
            waited,
            polls,
            last_status,
            last_error,
        } => {
            assert_eq!(workspace_id, &"fake-ws-1");
            assert!(*waited >= fast_wait().timeout);
            assert!(*polls > 1);
            assert_eq!(*polls as usize, client.status_call_count());
            assert_eq!(last_status, &Some(WorkspaceStatus::Starting));
            assert!(last_error.is_none());
        }
        other => panic!("Expected Timeout, got {:?}", other),
    }
    assert!(err.to_string().contains("did not reach RUNNING"));
    assert!(err.to_string().contains("STARTING"));
    assert_eq!(controller.state(), ControllerState::Failed);
    assert!(controller.workspace().is_none());
}

#[tokio::test(start_paused = true)]
async fn transient_status_errors_are_retried() {
    let (client, _, mut controller) = controller(platform_config());
    client.set_status_replies(vec![
        Err(ClientError::Request("connection reset".to_string())),
        Err(ClientError::Status {
            status: 503,
            body: "unavailable".to_string(),
        }),
        Ok(WorkspaceStatus::Starting),
        Ok(WorkspaceStatus::Running),
    ]);

    controller.set_up().await.unwrap();

    assert_eq!(controller.state(), ControllerState::Ready);
    assert_eq!(client.status_call_count(), 4);
}

#[tokio::test(start_paused = true)]
async fn persistent_status_errors_end_in_timeout() {
    let (client, _, mut controller) = controller(platform_config());
    client.set_status_replies(vec![Err(ClientError::Request("no route".to_string()))]);

    let err = controller.set_up().await.unwrap_err();

    match &err {
        SetupError::Timeout {
            last_status,
            last_error,
            ..
        } => {
            assert!(last_status.is_none());
            assert!(matches!(last_error, Some(ClientError::Request(_))));
        }
        other => panic!("Expected Timeout, got {:?}", other),
    }
    assert!(err.to_string().contains("no route"));
}

#[tokio::test(start_paused = true)]
async fn hung_status_call_is_cut_off_at_the_deadline() {
    let (client, _, mut controller) = controller(platform_config());
    client.hang_status();
    let started = tokio::time::Instant::now();

    let err = tokio::time::timeout(Duration::from_secs(3600), controller.set_up())
        .await
        .expect("set_up should not outlive its wait budget")
        .unwrap_err();

    match &err {
        SetupError::Timeout {
            polls,
            last_status,
            last_error,
            ..
        } => {
            assert_eq!(*polls, 1);
            assert!(last_status.is_none());
            match last_error {
                Some(ClientError::Request(msg)) => assert!(msg.contains("still pending")),
                other => panic!("Expected Request error, got {:?}", other),
            }
        }
        other => panic!("Expected Timeout, got {:?}", other),
    }
    let waited = started.elapsed();
    assert!(waited >= fast_wait().timeout);
    assert!(waited < fast_wait().timeout + Duration::from_secs(1));
    assert_eq!(client.status_call_count(), 1);
    assert_eq!(controller.state(), ControllerState::Failed);
}

#[tokio::test(start_paused = true)]
async fn creation_failure_is_fatal() {
    let (client, _, mut controller) = controller(platform_config());
    client.fail_create(ClientError::Status {
        status: 500,
        body: "starter exploded".to_string(),
    });

    let err = controller.set_up().await.unwrap_err();

    assert!(matches!(err, SetupError::Creation(_)));
    assert_eq!(controller.state(), ControllerState::Failed);
    assert!(controller.workspace().is_none());
    assert_eq!(call_names(&client.calls()), vec!["create"]);

    // Nothing was provisioned, so nothing to delete
    assert!(matches!(
        controller.tear_down().await,
        TeardownOutcome::NothingToTearDown
    ));
    assert_eq!(client.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn missing_configuration_fails_before_any_call() {
    let config = RunConfiguration {
        namespace: Some("ns".to_string()),
        ..Default::default()
    };
    let (client, _, mut controller) = controller(config);

    let err = controller.set_up().await.unwrap_err();

    match err {
        SetupError::Config(ref config_err) => assert_eq!(
            config_err.problems,
            vec![
                ConfigProblem::MissingStarterUrl,
                ConfigProblem::MissingMasterUrl,
                ConfigProblem::MissingCredentials,
            ]
        ),
        other => panic!("Expected Config error, got {:?}", other),
    }
    assert!(client.calls().is_empty());
    assert_eq!(controller.state(), ControllerState::Uninitialized);
}

#[tokio::test(start_paused = true)]
async fn token_exchange_failure_orphans_the_workspace() {
    let (client, _, mut controller) = controller(platform_config());
    client.fail_exchange(ClientError::Status {
        status: 401,
        body: "expired".to_string(),
    });

    let err = controller.set_up().await.unwrap_err();
    assert!(matches!(err, SetupError::Authorization { .. }));
    assert_eq!(controller.state(), ControllerState::Failed);
    assert!(controller.workspace().is_none());

    // Without a token no status/stop is possible, but delete still runs
    let outcome = controller.tear_down().await;
    assert!(matches!(outcome, TeardownOutcome::Cleaned { stopped: false, .. }));
    assert_eq!(
        call_names(&client.calls()),
        vec!["create", "exchange", "delete"]
    );
}

#[tokio::test(start_paused = true)]
async fn timed_out_workspace_is_deleted_at_teardown() {
    let (client, _, mut controller) = controller(platform_config());
    client.set_statuses(vec![WorkspaceStatus::Starting]);

    controller.set_up().await.unwrap_err();
    let before = client.calls().len();

    let outcome = controller.tear_down().await;

    assert!(matches!(outcome, TeardownOutcome::Cleaned { stopped: false, .. }));
    assert_eq!(call_names(&client.calls()[before..]), vec!["status", "delete"]);
    assert_eq!(controller.state(), ControllerState::Terminated);
}

#[tokio::test(start_paused = true)]
async fn set_up_twice_is_rejected() {
    let (client, _, mut controller) = ready_controller(platform_config()).await;
    let before = client.calls().len();

    let err = controller.set_up().await.unwrap_err();

    assert!(matches!(err, SetupError::InvalidState(ControllerState::Ready)));
    assert_eq!(client.calls().len(), before);
}

#[test]
fn wait_policy_defaults() {
    let wait = WaitPolicy::default();
    assert_eq!(wait.poll_interval, Duration::from_secs(5));
    assert_eq!(wait.timeout, Duration::from_secs(300));
}
