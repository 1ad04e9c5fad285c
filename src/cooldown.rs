//! Last-check stamp with a 24 hour cooldown
//!
//! The stamp is an empty-ish file in the build directory; its modification
//! time records when the last completed check ran.

use crate::error::IoError;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Stamp filename inside the build directory
pub const STAMP_FILENAME: &str = "_geobuild-last-update.txt";

/// Minimum time between two checks
pub const COOLDOWN: Duration = Duration::from_secs(24 * 60 * 60);

/// Stamp file recording the last completed update check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStamp {
    path: PathBuf,
}

impl UpdateStamp {
    /// Stamp inside the given build directory
    pub fn new(build_dir: &Path) -> Self {
        Self {
            path: build_dir.join(STAMP_FILENAME),
        }
    }

    /// Path of the stamp file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When the last check completed, if ever
    pub fn last_checked(&self) -> Option<SystemTime> {
        std::fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .ok()
    }

    /// Returns true if no check completed within the cooldown before `now`
    pub fn is_due(&self, now: SystemTime) -> bool {
        match self.last_checked() {
            None => true,
            // a stamp from the future counts as recent
            Some(last) => now
                .duration_since(last)
                .map(|age| age > COOLDOWN)
                .unwrap_or(false),
        }
    }

    /// Record a completed check now
    pub fn touch(&self) -> Result<(), IoError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| IoError::generic(parent, e))?;
        }

        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        std::fs::write(&self.path, format!("{}\n", stamp))
            .map_err(|e| IoError::generic(&self.path, e))
    }
}
