//! GitHub REST API resolver
//!
//! Resolves the newest tag or commit of a repository.
//! API endpoints:
//! - Tags: https://api.github.com/repos/{owner}/{repo}/tags
//! - Commits: https://api.github.com/repos/{owner}/{repo}/commits
//!
//! Both endpoints return a JSON array, newest first. Only the first
//! element is looked at.

use crate::error::RegistryError;
use crate::registry::{HttpClient, VersionResolver};
use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// GitHub API base URL
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Web repository URL: scheme and `www.` optional, `.git` and a trailing slash tolerated
static REPOSITORY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?(?i:github\.com)/([^/\s]+)/([^/\s]+?)(?:\.git)?/?$")
        .unwrap()
});

/// Owner and name of a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinates {
    /// Account or organisation
    pub owner: String,
    /// Repository name without `.git`
    pub repo: String,
}

impl RepoCoordinates {
    /// Parse a repository web URL such as `https://github.com/owner/repo.git`
    pub fn parse(repository_url: &str) -> Result<Self, RegistryError> {
        let caps = REPOSITORY_RE
            .captures(repository_url.trim())
            .ok_or_else(|| {
                RegistryError::invalid_repository(
                    repository_url,
                    "expected https://github.com/<owner>/<repo>[.git]",
                )
            })?;

        Ok(Self {
            owner: caps[1].to_string(),
            repo: caps[2].to_string(),
        })
    }
}

/// Resolver backed by the GitHub REST API
pub struct GitHubResolver {
    client: HttpClient,
    api_base: String,
}

impl GitHubResolver {
    /// Create a resolver talking to api.github.com
    pub fn new(client: HttpClient) -> Self {
        Self::with_api_base(client, GITHUB_API_URL)
    }

    /// Create a resolver talking to a different API host
    pub fn with_api_base(client: HttpClient, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self { client, api_base }
    }

    /// Build the API URL for a repository endpoint (`tags` or `commits`)
    fn build_url(&self, repository_url: &str, endpoint: &str) -> Result<String, RegistryError> {
        let coords = RepoCoordinates::parse(repository_url)?;
        Ok(format!(
            "{}/repos/{}/{}/{}",
            self.api_base, coords.owner, coords.repo, endpoint
        ))
    }

    /// Fetch an endpoint and pull `field` out of its first array element
    async fn fetch_first(
        &self,
        repository_url: &str,
        endpoint: &str,
        field: &str,
    ) -> Result<String, RegistryError> {
        let url = self.build_url(repository_url, endpoint)?;
        let body: Value = self
            .client
            .get_json(&url, repository_url, self.registry_name())
            .await?;

        first_field(&body, field).ok_or_else(|| {
            RegistryError::invalid_response(
                repository_url,
                self.registry_name(),
                format!("no {} found", endpoint),
            )
        })
    }
}

/// Returns `body[0][field]` as a string if `body` is a non-empty array
fn first_field(body: &Value, field: &str) -> Option<String> {
    body.as_array()?
        .first()?
        .get(field)?
        .as_str()
        .map(str::to_string)
}

#[async_trait]
impl VersionResolver for GitHubResolver {
    fn registry_name(&self) -> &'static str {
        "GitHub"
    }

    async fn latest_tag(&self, repository_url: &str) -> Result<String, RegistryError> {
        self.fetch_first(repository_url, "tags", "name").await
    }

    async fn latest_commit(&self, repository_url: &str) -> Result<String, RegistryError> {
        self.fetch_first(repository_url, "commits", "sha").await
    }
}
