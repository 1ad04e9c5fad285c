//! Dependency manifest (geobuild.toml) parser
//!
//! Handles:
//! - `[[dependency]]` array of tables
//! - Repository shorthands: `gh:owner/repo`, `owner/repo`, full URLs
//! - Name derived from the repository when not given
//! - Visibility and CPM options

use crate::domain::{Dependency, Visibility};
use crate::error::ManifestError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Default manifest filename inside the project directory
pub const DEPS_FILENAME: &str = "geobuild.toml";

/// Top-level manifest layout
#[derive(Debug, Deserialize)]
struct DepsFile {
    #[serde(default, rename = "dependency")]
    dependencies: Vec<DependencyEntry>,
}

/// One `[[dependency]]` table; unknown keys (e.g. `link_name`) are ignored
#[derive(Debug, Deserialize)]
struct DependencyEntry {
    repo: String,
    tag: String,
    name: Option<String>,
    #[serde(default)]
    visibility: Visibility,
    #[serde(default)]
    options: BTreeMap<String, String>,
}

/// Read and parse a dependency manifest
pub fn load_dependencies(path: &Path) -> Result<Vec<Dependency>, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::not_found(path));
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;
    parse_dependencies(&content, path)
}

/// Parse dependency manifest content; `path` is only used in error messages
pub fn parse_dependencies(content: &str, path: &Path) -> Result<Vec<Dependency>, ManifestError> {
    let file: DepsFile = toml::from_str(content)
        .map_err(|e| ManifestError::toml_parse_error(path, e.to_string()))?;

    file.dependencies
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.into_dependency(path, index + 1))
        .collect()
}

impl DependencyEntry {
    fn into_dependency(self, path: &Path, index: usize) -> Result<Dependency, ManifestError> {
        let repo = self.repo.trim();
        if repo.is_empty() {
            return Err(ManifestError::invalid_dependency(path, index, "empty repo"));
        }

        let tag = self.tag.trim();
        if tag.is_empty() {
            return Err(ManifestError::invalid_dependency(path, index, "empty tag"));
        }

        let repository_url = normalize_repository(repo);
        let name = match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => derive_name(&repository_url),
        };
        if name.is_empty() {
            return Err(ManifestError::invalid_dependency(
                path,
                index,
                format!("cannot derive a name from '{}'", repo),
            ));
        }

        Ok(Dependency::new(name, repository_url, tag)
            .with_visibility(self.visibility)
            .with_options(self.options))
    }
}

/// Expand CPM-style shorthands into a full repository URL.
///
/// `gh:` is dropped, and a bare `owner/repo` becomes
/// `https://github.com/owner/repo.git`.
pub fn normalize_repository(repo: &str) -> String {
    let repo = repo.strip_prefix("gh:").unwrap_or(repo);

    if repo.matches('/').count() == 1 {
        format!("https://github.com/{}.git", repo)
    } else {
        repo.to_string()
    }
}

/// Last path segment of a repository URL without `.git`
pub fn derive_name(repository_url: &str) -> String {
    let last = repository_url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    last.strip_suffix(".git").unwrap_or(last).to_string()
}
