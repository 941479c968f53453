// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use cws_adapters::{ClientCall, FakePreservePolicy, FakeWorkspaceClient};

mod setup;
mod teardown;

type TestController = LifecycleController<FakeWorkspaceClient, FakePreservePolicy>;

/// One-second polls against a ten-second budget; paused-time tests make
/// this instant.
fn fast_wait() -> WaitPolicy {
    WaitPolicy {
        poll_interval: Duration::from_secs(1),
        timeout: Duration::from_secs(10),
    }
}

fn platform_config() -> RunConfiguration {
    RunConfiguration {
        starter_url: Some("https://starter.example.com".to_string()),
        master_url: Some("https://master.example.com:8443".to_string()),
        namespace: Some("dev-che".to_string()),
        platform_token: Some("oc-token".to_string()),
        ..Default::default()
    }
}

fn keycloak_config() -> RunConfiguration {
    RunConfiguration {
        keycloak_token: Some("kc-token".to_string()),
        ..platform_config()
    }
}

fn external_config() -> RunConfiguration {
    RunConfiguration {
        workspace_url: Some("https://che.example.com/dev/existing".to_string()),
        ..keycloak_config()
    }
}

fn controller(config: RunConfiguration) -> (FakeWorkspaceClient, FakePreservePolicy, TestController) {
    let client = FakeWorkspaceClient::new();
    let preserve = FakePreservePolicy::new(false);
    let controller = LifecycleController::new(config, client.clone(), preserve.clone())
        .with_wait_policy(fast_wait());
    (client, preserve, controller)
}

/// Controller that has completed `set_up` against an immediately running
/// workspace.
async fn ready_controller(
    config: RunConfiguration,
) -> (FakeWorkspaceClient, FakePreservePolicy, TestController) {
    let (client, preserve, mut controller) = controller(config);
    controller.set_up().await.unwrap();
    assert_eq!(controller.state(), ControllerState::Ready);
    (client, preserve, controller)
}

/// Secret presented on each call that carries one, in call order.
fn secrets_used(calls: &[ClientCall]) -> Vec<String> {
    calls
        .iter()
        .filter_map(|call| match call {
            ClientCall::Create { credential, .. } | ClientCall::ExchangeToken { credential } => {
                Some(credential.secret().to_string())
            }
            ClientCall::GetStatus { token, .. } | ClientCall::Stop { token, .. } => {
                Some(token.as_str().to_string())
            }
            ClientCall::Delete { .. } => None,
        })
        .collect()
}

/// Short names of calls, for order assertions.
fn call_names(calls: &[ClientCall]) -> Vec<&'static str> {
    calls
        .iter()
        .map(|call| match call {
            ClientCall::Create { .. } => "create",
            ClientCall::ExchangeToken { .. } => "exchange",
            ClientCall::GetStatus { .. } => "status",
            ClientCall::Stop { .. } => "stop",
            ClientCall::Delete { .. } => "delete",
        })
        .collect()
}
