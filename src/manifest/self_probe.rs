//! Detection of the build tool's own pinned version
//!
//! Projects pull geobuild in through CPM in their `CMakeLists.txt`, e.g.
//! `CPMAddPackage("gh:dankmeme01/geobuild@v2.3.0")`. The text after the
//! package coordinates, up to the closing quote, is the pin.

use crate::domain::Dependency;
use std::path::Path;
use tracing::debug;

/// Package coordinates searched for in the project's CMake file
pub const SELF_MARKER: &str = "dankmeme01/geobuild";

/// Name of the synthetic self-dependency
pub const SELF_NAME: &str = "geobuild";

/// Canonical repository of the build tool
pub const SELF_REPOSITORY: &str = "https://github.com/dankmeme01/geobuild";

/// File the probe reads inside the project directory
pub const PROJECT_CMAKE_FILE: &str = "CMakeLists.txt";

/// Build the self-dependency from the text of the project's CMake file.
///
/// Returns `None` if the coordinates do not appear or no pin follows them.
pub fn probe_self_dependency(own_config_text: &str) -> Option<Dependency> {
    let start = own_config_text.find(SELF_MARKER)? + SELF_MARKER.len();

    // one separator character (`@`, `#`, ...) sits between coordinates and pin
    let mut rest = own_config_text[start..].chars();
    rest.next()?;

    let pin = rest.as_str().split('"').next().unwrap_or_default().trim();
    if pin.is_empty() {
        return None;
    }

    Some(Dependency::new(SELF_NAME, SELF_REPOSITORY, pin))
}

/// Probe `<project_dir>/CMakeLists.txt`; an unreadable file means no self-check
pub fn probe_project_dir(project_dir: &Path) -> Option<Dependency> {
    let path = project_dir.join(PROJECT_CMAKE_FILE);
    match std::fs::read_to_string(&path) {
        Ok(text) => {
            let dependency = probe_self_dependency(&text);
            if dependency.is_none() {
                debug!(path = %path.display(), "no geobuild pin found, skipping self-check");
            }
            dependency
        }
        Err(e) => {
            debug!(path = %path.display(), "cannot read project CMake file: {}", e);
            None
        }
    }
}
