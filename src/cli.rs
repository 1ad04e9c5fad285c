//! CLI argument parsing module for geobuild-update

use clap::Parser;
use std::path::PathBuf;

/// Check geobuild CPM dependencies for newer tags and commits
#[derive(Parser, Debug, Clone)]
#[command(
    name = "geobuild-update",
    version,
    about = "Check geobuild CPM dependencies for newer tags and commits"
)]
pub struct CliArgs {
    /// Project directory (default: CMAKE_SOURCE_DIR, else current directory)
    pub path: Option<PathBuf>,

    /// Dependency manifest (default: <PATH>/geobuild.toml)
    #[arg(short, long, value_name = "FILE")]
    pub deps: Option<PathBuf>,

    /// Build directory holding the last-check stamp (default: CMAKE_BINARY_DIR, else <PATH>/build)
    #[arg(long, value_name = "DIR")]
    pub build_dir: Option<PathBuf>,

    /// Read `;;`-separated CMake variables from stdin
    #[arg(long)]
    pub cmake_vars: bool,

    /// Check even if GEOBUILD_UPDATE_CHECK is off or the last check was recent
    #[arg(short, long)]
    pub force: bool,

    /// Do not check geobuild's own pin from CMakeLists.txt
    #[arg(long)]
    pub no_self_check: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// GitHub API base URL
    #[arg(long, value_name = "URL", hide = true)]
    pub api_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print available updates and failures (hides up-to-date lines and the start/elapsed summary lines)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
