//! Configuration from CMake variables, environment and CLI
//!
//! CMake hands its variables to the build script on stdin as one block of
//! `KEY=VALUE` pairs separated by `;;`, e.g.
//! `CMAKE_SOURCE_DIR=/src/mod;;CMAKE_BINARY_DIR=/src/mod/build;;`.
//!
//! Lookups for the token and the update-check flag prefer the CMake
//! variable and fall back to the process environment.

use crate::cli::CliArgs;
use crate::error::{AppError, ConfigError, IoError};
use crate::manifest::DEPS_FILENAME;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Variable holding the GitHub API token
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Variable enabling the update check
pub const UPDATE_CHECK_VAR: &str = "GEOBUILD_UPDATE_CHECK";

/// Project source directory variable
pub const SOURCE_DIR_VAR: &str = "CMAKE_SOURCE_DIR";

/// Project build directory variable
pub const BINARY_DIR_VAR: &str = "CMAKE_BINARY_DIR";

/// Build directory used when neither the CLI nor CMake names one
const DEFAULT_BUILD_DIR: &str = "build";

/// Returns true for the usual spellings of "on"
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "y"
    )
}

/// Variables passed in from CMake
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CMakeVars {
    vars: HashMap<String, String>,
}

impl CMakeVars {
    /// Parse a `;;`-separated block of `KEY=VALUE` pairs.
    ///
    /// Segments without `=` are ignored; values may themselves contain `=`.
    pub fn parse(block: &str) -> Self {
        let vars = block
            .trim()
            .trim_matches(';')
            .split(";;")
            .filter_map(|part| part.split_once('='))
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Self { vars }
    }

    /// Look up a variable
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Look up a variable with a fallback
    pub fn var<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Look up a variable that CMake must have passed
    pub fn var_require(&self, key: &str) -> Result<&str, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::missing_variable(key))
    }

    /// Look up a boolean variable
    pub fn bool_var(&self, key: &str, default: bool) -> bool {
        self.get(key).map(is_truthy).unwrap_or(default)
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if no variables were passed
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Resolved settings for one run of the binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Project source directory
    pub project_dir: PathBuf,
    /// Build directory holding the cooldown stamp
    pub build_dir: PathBuf,
    /// Dependency manifest
    pub deps_file: PathBuf,
    /// Whether the manifest was named explicitly (and so must exist)
    pub deps_required: bool,
    /// GitHub API token
    pub github_token: Option<String>,
    /// Whether the update check is switched on
    pub update_check: bool,
    /// Ignore the switch and the cooldown
    pub force: bool,
    /// Also check the build tool's own pin
    pub self_check: bool,
    /// Per-request timeout
    pub timeout: Duration,
    /// API base URL override
    pub api_url: Option<String>,
}

impl Settings {
    /// Combine CLI arguments, CMake variables and the environment.
    ///
    /// `env` looks up process environment variables; it is a parameter so
    /// callers can supply a fixed environment.
    pub fn resolve<F>(args: &CliArgs, vars: &CMakeVars, env: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let project_dir = match (&args.path, vars.get(SOURCE_DIR_VAR)) {
            (Some(path), _) => path.clone(),
            (None, Some(dir)) => PathBuf::from(dir),
            (None, None) => PathBuf::from("."),
        };
        if !project_dir.is_dir() {
            return Err(IoError::directory_not_found(project_dir).into());
        }

        let build_dir = match (&args.build_dir, vars.get(BINARY_DIR_VAR)) {
            (Some(dir), _) => dir.clone(),
            (None, Some(dir)) => PathBuf::from(dir),
            (None, None) => project_dir.join(DEFAULT_BUILD_DIR),
        };

        let (deps_file, deps_required) = match &args.deps {
            Some(file) => (file.clone(), true),
            None => (project_dir.join(DEPS_FILENAME), false),
        };

        let github_token = vars
            .get(TOKEN_VAR)
            .map(str::to_string)
            .or_else(|| env(TOKEN_VAR))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let update_check = vars
            .get(UPDATE_CHECK_VAR)
            .map(str::to_string)
            .or_else(|| env(UPDATE_CHECK_VAR))
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        if args.timeout == 0 {
            return Err(ConfigError::invalid_value(
                "--timeout",
                args.timeout.to_string(),
                "must be at least 1 second",
            )
            .into());
        }

        Ok(Self {
            project_dir,
            build_dir,
            deps_file,
            deps_required,
            github_token,
            update_check,
            force: args.force,
            self_check: !args.no_self_check,
            timeout: Duration::from_secs(args.timeout),
            api_url: args.api_url.clone(),
        })
    }

    /// Returns true if the check is switched on or forced
    pub fn check_enabled(&self) -> bool {
        self.force || self.update_check
    }
}
