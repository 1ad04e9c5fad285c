//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with the dependency manifest file
//! - RegistryError: Issues with the GitHub API
//! - ConfigError: Issues with CMake variables or CLI configuration
//! - IoError: File system operation failures

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Dependency manifest related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to the dependency manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("dependency manifest not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read dependency manifest {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// A dependency entry is missing required data
    #[error("invalid dependency #{index} in {path}: {message}")]
    InvalidDependency {
        path: PathBuf,
        index: usize,
        message: String,
    },
}

/// Errors related to resolving versions from the remote
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Repository does not exist (HTTP 404)
    #[error("repository '{repository}' not found on {registry}")]
    RepositoryNotFound {
        repository: String,
        registry: String,
    },

    /// Network request failed
    #[error("failed to reach {registry} for '{repository}': {message}")]
    NetworkError {
        repository: String,
        registry: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {registry} (set GITHUB_TOKEN to raise it)")]
    RateLimitExceeded { registry: String },

    /// Non-success HTTP status
    #[error("request for {url} failed: {status} {reason}")]
    HttpError {
        url: String,
        status: u16,
        reason: String,
    },

    /// Response body was not what the API promises
    #[error("invalid response from {registry} for '{repository}': {message}")]
    InvalidResponse {
        repository: String,
        registry: String,
        message: String,
    },

    /// Repository URL cannot be mapped to an API endpoint
    #[error("unsupported repository URL '{repository}': {message}")]
    InvalidRepository { repository: String, message: String },

    /// Timeout
    #[error("timeout while fetching '{repository}' from {registry}")]
    Timeout {
        repository: String,
        registry: String,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required CMake variable was not passed in
    #[error("required variable '{key}' was not set in CMake")]
    MissingVariable { key: String },

    /// A variable or option has an unusable value
    #[error("invalid value '{value}' for {key}: {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Generic IO error
    #[error("IO error at {path}: {source}")]
    Generic {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidDependency error
    pub fn invalid_dependency(
        path: impl Into<PathBuf>,
        index: usize,
        message: impl Into<String>,
    ) -> Self {
        ManifestError::InvalidDependency {
            path: path.into(),
            index,
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new RepositoryNotFound error
    pub fn repository_not_found(repository: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::RepositoryNotFound {
            repository: repository.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        repository: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            repository: repository.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new RateLimitExceeded error
    pub fn rate_limit_exceeded(registry: impl Into<String>) -> Self {
        RegistryError::RateLimitExceeded {
            registry: registry.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        repository: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            repository: repository.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidRepository error
    pub fn invalid_repository(repository: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::InvalidRepository {
            repository: repository.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(repository: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            repository: repository.into(),
            registry: registry.into(),
        }
    }

    /// Returns the HTTP status code, if this error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            RegistryError::HttpError { status, .. } => Some(*status),
            RegistryError::RepositoryNotFound { .. } => Some(404),
            _ => None,
        }
    }
}

impl ConfigError {
    /// Creates a new MissingVariable error
    pub fn missing_variable(key: impl Into<String>) -> Self {
        ConfigError::MissingVariable { key: key.into() }
    }

    /// Creates a new InvalidValue error
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
            message: message.into(),
        }
    }
}

impl IoError {
    /// Creates a new DirectoryNotFound error
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        IoError::DirectoryNotFound { path: path.into() }
    }

    /// Creates a new Generic IO error
    pub fn generic(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Generic {
            path: path.into(),
            source,
        }
    }
}
