//! GitHub issue tracker
//!
//! Implements `IssueTracker` against the GitHub REST API
//! (`POST /repos/{owner}/{repo}/issues`). Requests are blocking and sent
//! one at a time.

use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};

use crate::config::TrackerSettings;
use crate::core::models::{CreatedIssue, IssueRequest, PublishError};
use crate::core::ports::IssueTracker;
use crate::paths;

/// Media type GitHub recommends for REST calls
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// REST API version pinned in every request
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Files issues in a GitHub repository
#[derive(Debug)]
pub struct GitHubTracker {
    client: Client,
    endpoint: String,
}

impl GitHubTracker {
    /// Build a tracker for the repository described by `settings`
    pub fn new(settings: &TrackerSettings) -> Result<Self, PublishError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", settings.token))
            .map_err(|e| PublishError::Transport(format!("invalid token: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert("x-github-api-version", HeaderValue::from_static(GITHUB_API_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("smellpost/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| PublishError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: paths::issues_endpoint(&settings.api_url, &settings.owner, &settings.repo),
        })
    }

    /// The issue-creation URL requests are sent to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl IssueTracker for GitHubTracker {
    fn create_issue(&mut self, request: &IssueRequest) -> Result<CreatedIssue, PublishError> {
        debug!("POST {} ({} byte body)", self.endpoint, request.body.len());
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| PublishError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response.text().map_err(|e| PublishError::Transport(e.to_string()))?;

        if status != StatusCode::CREATED {
            return Err(PublishError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            warn!("Issue created but response was not understood: {e}");
            CreatedIssue::default()
        }))
    }
}
