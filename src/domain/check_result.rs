//! Update check result types

use super::{Dependency, PinKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict of a single dependency check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckStatus {
    /// The remote has something newer than the pin
    UpdateAvailable,
    /// The pin matches the remote
    UpToDate,
    /// The remote lookup failed
    Failed {
        /// Why the lookup failed
        reason: String,
    },
}

/// Result of checking one dependency against its remote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Name of the checked dependency
    pub dependency_name: String,
    /// Repository the lookup went to
    pub repository_url: String,
    /// Which lookup was used
    pub kind: PinKind,
    /// Pin as compared (commit pins are truncated to the common length)
    pub current: String,
    /// Latest tag or commit as compared, absent when the lookup failed
    pub latest: Option<String>,
    /// Verdict
    pub status: CheckStatus,
}

impl CheckOutcome {
    /// Creates a successful outcome from the compared forms of pin and latest
    pub fn resolved(
        dependency: &Dependency,
        current: impl Into<String>,
        latest: impl Into<String>,
    ) -> Self {
        let current = current.into();
        let latest = latest.into();
        let status = if current == latest {
            CheckStatus::UpToDate
        } else {
            CheckStatus::UpdateAvailable
        };

        Self {
            dependency_name: dependency.name.clone(),
            repository_url: dependency.repository_url.clone(),
            kind: dependency.pin_kind(),
            current,
            latest: Some(latest),
            status,
        }
    }

    /// Creates a failed outcome
    pub fn failed(dependency: &Dependency, reason: impl Into<String>) -> Self {
        Self {
            dependency_name: dependency.name.clone(),
            repository_url: dependency.repository_url.clone(),
            kind: dependency.pin_kind(),
            current: dependency.pin.clone(),
            latest: None,
            status: CheckStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    /// Returns true if a newer tag or commit exists
    pub fn has_update(&self) -> bool {
        matches!(self.status, CheckStatus::UpdateAvailable)
    }

    /// Returns true if the lookup failed
    pub fn is_failed(&self) -> bool {
        matches!(self.status, CheckStatus::Failed { .. })
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let latest = self.latest.as_deref().unwrap_or_default();
        match &self.status {
            CheckStatus::UpdateAvailable => write!(
                f,
                "Update available for {}: {} -> {}",
                self.dependency_name, self.current, latest
            ),
            CheckStatus::UpToDate => write!(f, "{} is up to date ({})", self.dependency_name, latest),
            CheckStatus::Failed { reason } => write!(
                f,
                "Failed to fetch latest {} for {}: {}",
                self.kind.target_noun(),
                self.repository_url,
                reason
            ),
        }
    }
}
