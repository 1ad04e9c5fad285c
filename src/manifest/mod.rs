//! Project file readers
//!
//! This module provides functionality to:
//! - Load declared dependencies from the project's `geobuild.toml`
//! - Detect the build tool's own pin in the project's `CMakeLists.txt`

mod deps_file;
mod self_probe;

pub use deps_file::{
    derive_name, load_dependencies, normalize_repository, parse_dependencies, DEPS_FILENAME,
};
pub use self_probe::{
    probe_project_dir, probe_self_dependency, PROJECT_CMAKE_FILE, SELF_MARKER, SELF_NAME,
    SELF_REPOSITORY,
};
