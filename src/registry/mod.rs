//! Remote version resolvers
//!
//! This module provides:
//! - HTTP client shared foundation with token support
//! - GitHub REST API resolver for latest tags and commits

mod client;
mod github;

pub use client::{HttpClient, DEFAULT_TIMEOUT};
pub use github::{GitHubResolver, RepoCoordinates, GITHUB_API_URL};

use crate::error::RegistryError;
use async_trait::async_trait;

/// Looks up the newest tag or commit of a repository
#[async_trait]
pub trait VersionResolver: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Name of the most recent tag
    async fn latest_tag(&self, repository_url: &str) -> Result<String, RegistryError>;

    /// Hash of the most recent commit on the default branch
    async fn latest_commit(&self, repository_url: &str) -> Result<String, RegistryError>;
}
