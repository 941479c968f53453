// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! che-starter REST client

use super::{ClientError, WorkspaceClient};
use async_trait::async_trait;
use cws_core::{AuthCredential, AuthorizationToken, Workspace, WorkspaceStatus};
use reqwest::{RequestBuilder, Response, Url};
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::Path;

const SELF_LINK_REL: &str = "self link";
const IDE_LINK_REL: &str = "ide url";

/// Workspace client backed by the che-starter REST API.
///
/// Keycloak credentials use `POST {starter}/workspace`, platform tokens use
/// `POST {starter}/workspace/oso`. Status, stop and delete go straight to the
/// workspace's self link.
#[derive(Clone, Debug)]
pub struct CheStarterClient {
    http: reqwest::Client,
}

impl CheStarterClient {
    /// Build a client with the configured request timeout.
    pub fn new() -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(crate::env::http_timeout())
            .build()
            .map_err(|e| ClientError::Request(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http })
    }

    /// Build a client around an existing HTTP client.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[derive(Debug, Deserialize)]
struct WorkspaceDto {
    id: String,
    #[serde(default)]
    links: Vec<LinkDto>,
}

#[derive(Debug, Deserialize)]
struct LinkDto {
    rel: String,
    href: String,
}

#[derive(Debug, Deserialize)]
struct StatusDto {
    status: WorkspaceStatus,
}

/// Create endpoint for a credential kind, with query parameters applied.
pub(crate) fn create_url(
    starter_url: &str,
    master_url: &str,
    credential: &AuthCredential,
    namespace: Option<&str>,
) -> Result<Url, ClientError> {
    let path = match credential {
        AuthCredential::Keycloak(_) => "workspace",
        AuthCredential::Platform(_) => "workspace/oso",
    };
    let base = format!("{}/{}", starter_url.trim_end_matches('/'), path);

    let mut params = vec![("masterUrl", master_url)];
    if let Some(ns) = namespace {
        params.push(("namespace", ns));
    }
    Url::parse_with_params(&base, &params)
        .map_err(|e| ClientError::Request(format!("invalid starter URL {base}: {e}")))
}

/// Request body for workspace creation: the template file when given,
/// otherwise a minimal description.
pub(crate) async fn create_body(template: Option<&Path>) -> Result<Value, ClientError> {
    let Some(path) = template else {
        return Ok(json!({ "description": "cws test workspace" }));
    };
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ClientError::Template {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    serde_json::from_str(&content).map_err(|e| ClientError::Template {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Turn a che workspace document into a managed [`Workspace`].
pub(crate) fn parse_workspace(body: &str) -> Result<Workspace, ClientError> {
    let dto: WorkspaceDto =
        serde_json::from_str(body).map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
    let link = |rel: &str| {
        dto.links
            .iter()
            .find(|l| l.rel == rel)
            .map(|l| l.href.clone())
    };
    Ok(Workspace::managed(
        dto.id.clone(),
        link(IDE_LINK_REL),
        link(SELF_LINK_REL),
    ))
}

pub(crate) fn parse_status(body: &str) -> Result<WorkspaceStatus, ClientError> {
    serde_json::from_str::<StatusDto>(body)
        .map(|dto| dto.status)
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

fn self_link(workspace: &Workspace) -> Result<&str, ClientError> {
    workspace
        .self_link
        .as_deref()
        .ok_or_else(|| ClientError::MissingLink(workspace.id.to_string()))
}

async fn send(request: RequestBuilder) -> Result<Response, ClientError> {
    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Request(e.to_string()))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn body_text(response: Response) -> Result<String, ClientError> {
    response
        .text()
        .await
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl WorkspaceClient for CheStarterClient {
    async fn create_workspace(
        &self,
        starter_url: &str,
        master_url: &str,
        credential: &AuthCredential,
        template: Option<&Path>,
        namespace: Option<&str>,
    ) -> Result<Workspace, ClientError> {
        let url = create_url(starter_url, master_url, credential, namespace)?;
        let body = create_body(template).await?;
        let response = send(
            self.http
                .post(url)
                .bearer_auth(credential.secret())
                .json(&body),
        )
        .await?;
        parse_workspace(&body_text(response).await?)
    }

    async fn exchange_token(
        &self,
        credential: &AuthCredential,
    ) -> Result<AuthorizationToken, ClientError> {
        // che-starter accepts both credential kinds as bearer tokens directly
        Ok(AuthorizationToken::new(credential.secret()))
    }

    async fn get_status(
        &self,
        workspace: &Workspace,
        token: &AuthorizationToken,
    ) -> Result<WorkspaceStatus, ClientError> {
        let url = self_link(workspace)?;
        let response = send(self.http.get(url).bearer_auth(token.as_str())).await?;
        parse_status(&body_text(response).await?)
    }

    async fn stop_workspace(
        &self,
        workspace: &Workspace,
        token: &AuthorizationToken,
    ) -> Result<(), ClientError> {
        let url = format!("{}/runtime", self_link(workspace)?.trim_end_matches('/'));
        send(self.http.delete(url).bearer_auth(token.as_str())).await?;
        Ok(())
    }

    async fn delete_workspace(&self, workspace: &Workspace) -> Result<(), ClientError> {
        send(self.http.delete(self_link(workspace)?)).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "che_tests.rs"]
mod tests;
