//! Gitee v5 REST API adapter
//!
//! Implements both ports against `https://gitee.com/api/v5`:
//!
//! - `ContentStore` via `GET /repos/{owner}/{repo}/contents/{path}?ref=`
//! - `CommentSink` via `POST /repos/{owner}/{repo}/pulls/{number}/comments`
//!   and `POST /repos/{owner}/{repo}/issues/{number}/comments`
//!
//! Requests are blocking and carry a timeout. Nothing is retried here.

use std::time::Duration;

use anyhow::Context;
use log::debug;
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::core::ports::{CommentSink, ContentStore, FetchError};

pub use super::GITEE_API_URL as DEFAULT_API_URL;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking Gitee API client
#[derive(Debug, Clone)]
pub struct GiteeClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Serialize)]
struct CommentRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    body: &'a str,
}

impl GiteeClient {
    /// Create a client for `base_url` (usually [`DEFAULT_API_URL`])
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(concat!("sigowners/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, route: &str, params: &[(&str, &str)]) -> Result<Url, FetchError> {
        let mut query: Vec<(&str, &str)> = params.to_vec();
        if let Some(token) = &self.token {
            query.push(("access_token", token.as_str()));
        }
        Url::parse_with_params(&format!("{}{route}", self.base_url), query)
            .map_err(|e| FetchError::Transport(format!("invalid url for {route}: {e}")))
    }

    fn post_comment(&self, route: &str, body: &str) -> anyhow::Result<()> {
        let url = format!("{}{route}", self.base_url);
        let request = CommentRequest {
            access_token: self.token.as_deref(),
            body,
        };

        self.client
            .post(&url)
            .json(&request)
            .send()
            .with_context(|| format!("POST {route} failed"))?
            .error_for_status()
            .with_context(|| format!("POST {route} was rejected"))?;
        Ok(())
    }
}

impl ContentStore for GiteeClient {
    fn get_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: &str,
    ) -> Result<String, FetchError> {
        let route = format!("/repos/{owner}/{repo}/contents/{path}");
        let url = self.url(&route, &[("ref", reference)])?;

        debug!("GET {route}?ref={reference}");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(format!("{owner}/{repo}/{path}@{reference}")));
        }
        if !status.is_success() {
            return Err(FetchError::Transport(format!("GET {route} returned {status}")));
        }

        let body: ContentResponse = response
            .json()
            .map_err(|e| FetchError::Transport(format!("unexpected response for {route}: {e}")))?;
        Ok(body.content)
    }
}

impl CommentSink for GiteeClient {
    fn create_pull_request_comment(
        &self,
        org: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> anyhow::Result<()> {
        self.post_comment(&format!("/repos/{org}/{repo}/pulls/{number}/comments"), body)
    }

    fn create_issue_comment(
        &self,
        org: &str,
        repo: &str,
        number: &str,
        body: &str,
    ) -> anyhow::Result<()> {
        self.post_comment(&format!("/repos/{org}/{repo}/issues/{number}/comments"), body)
    }
}
