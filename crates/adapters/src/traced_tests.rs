// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::client::{ClientCall, FakeWorkspaceClient};
use serial_test::{parallel, serial};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a test with captured tracing output
fn with_tracing<F, Fut>(f: F) -> (String, Fut::Output)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future,
{
    let logs = CapturedLogs::default();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(f())
    });

    (logs.contents(), result)
}

/// Assert that captured logs contain the expected substring
fn assert_log(logs: &str, label: &str, expected: &str) {
    assert!(logs.contains(expected), "Should log {label}. Logs:\n{logs}",);
}

fn keycloak() -> AuthCredential {
    AuthCredential::Keycloak("kc-secret".to_string())
}

fn managed() -> Workspace {
    Workspace::managed("ws-1", None, Some("fake://workspace/ws-1".to_string()))
}

// =============================================================================
// Tracing output verification tests
// =============================================================================

#[test]
#[serial(tracing)]
fn traced_create_logs_entry_and_completion() {
    let (logs, result) = with_tracing(|| async {
        let traced = TracedClient::new(FakeWorkspaceClient::new());
        traced
            .create_workspace("https://starter", "https://master", &keycloak(), None, Some("ns"))
            .await
    });

    assert!(result.is_ok(), "create should succeed: {:?}", result);
    assert_log(&logs, "span name", "workspace.create");
    assert_log(&logs, "credential kind", "keycloak");
    assert_log(&logs, "entry message", "starting");
    assert_log(&logs, "completion", "workspace created");
    assert_log(&logs, "timing", "elapsed_ms");
}

#[test]
#[serial(tracing)]
fn traced_create_never_logs_the_secret() {
    let (logs, _) = with_tracing(|| async {
        let traced = TracedClient::new(FakeWorkspaceClient::new());
        let ws = traced
            .create_workspace("https://starter", "https://master", &keycloak(), None, None)
            .await
            .unwrap();
        let token = traced.exchange_token(&keycloak()).await.unwrap();
        traced.get_status(&ws, &token).await
    });

    assert!(!logs.contains("kc-secret"), "secret leaked. Logs:\n{logs}");
}

#[test]
#[serial(tracing)]
fn traced_create_logs_error_on_failure() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeWorkspaceClient::new();
        fake.fail_create(ClientError::Status {
            status: 401,
            body: "unauthorized".to_string(),
        });
        TracedClient::new(fake)
            .create_workspace("https://starter", "https://master", &keycloak(), None, None)
            .await
    });

    assert!(result.is_err());
    assert_log(&logs, "create failure", "create failed");
    assert_log(&logs, "status code", "401");
}

#[test]
#[serial(tracing)]
fn traced_status_failure_logs_warning() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeWorkspaceClient::new();
        fake.set_status_replies(vec![Err(ClientError::Request("timed out".to_string()))]);
        TracedClient::new(fake)
            .get_status(&managed(), &AuthorizationToken::new("t"))
            .await
    });

    assert!(result.is_err());
    assert_log(&logs, "warn level", "WARN");
    assert_log(&logs, "status failure", "status check failed");
}

#[test]
#[serial(tracing)]
fn traced_stop_and_delete_log_operations() {
    let (logs, _) = with_tracing(|| async {
        let traced = TracedClient::new(FakeWorkspaceClient::new());
        let ws = managed();
        traced
            .stop_workspace(&ws, &AuthorizationToken::new("t"))
            .await
            .unwrap();
        traced.delete_workspace(&ws).await
    });

    assert_log(&logs, "stop span", "workspace.stop");
    assert_log(&logs, "stop completion", "stopped");
    assert_log(&logs, "delete span", "workspace.delete");
    assert_log(&logs, "delete completion", "deleted");
}

#[test]
#[serial(tracing)]
fn traced_delete_logs_error_on_failure() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeWorkspaceClient::new();
        fake.fail_delete(ClientError::Request("connection refused".to_string()));
        TracedClient::new(fake).delete_workspace(&managed()).await
    });

    assert!(result.is_err());
    assert_log(&logs, "delete failure", "delete failed");
}

// =============================================================================
// Delegation tests - verify traced wrapper delegates to inner client
// =============================================================================

#[tokio::test]
#[parallel(tracing)]
async fn traced_client_delegates_every_call() {
    let fake = FakeWorkspaceClient::new();
    let traced = TracedClient::new(fake.clone());

    let ws = traced
        .create_workspace("https://starter", "https://master", &keycloak(), None, None)
        .await
        .unwrap();
    let token = traced.exchange_token(&keycloak()).await.unwrap();
    traced.get_status(&ws, &token).await.unwrap();
    traced.stop_workspace(&ws, &token).await.unwrap();
    traced.delete_workspace(&ws).await.unwrap();

    let calls = fake.calls();
    assert_eq!(calls.len(), 5);
    assert!(matches!(calls[0], ClientCall::Create { .. }));
    assert!(matches!(calls[1], ClientCall::ExchangeToken { .. }));
    assert!(matches!(calls[2], ClientCall::GetStatus { .. }));
    assert!(matches!(calls[3], ClientCall::Stop { .. }));
    assert!(matches!(calls[4], ClientCall::Delete { .. }));
}

#[tokio::test]
#[parallel(tracing)]
async fn traced_client_passes_results_through() {
    let fake = FakeWorkspaceClient::new();
    fake.set_statuses(vec![WorkspaceStatus::Stopped]);
    let traced = TracedClient::new(fake);

    let status = traced
        .get_status(&managed(), &AuthorizationToken::new("t"))
        .await
        .unwrap();
    assert_eq!(status, WorkspaceStatus::Stopped);
}
