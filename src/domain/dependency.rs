//! Dependency information structures

use super::{PinKind, Visibility};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A declared external (CPM) dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// Git repository URL, e.g. `https://github.com/owner/repo.git`
    pub repository_url: String,
    /// Tag or commit the dependency is locked to
    pub pin: String,
    /// CPM options passed through to the package
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
    /// Link visibility
    #[serde(default)]
    pub visibility: Visibility,
}

impl Dependency {
    /// Creates a new private dependency without options
    pub fn new(
        name: impl Into<String>,
        repository_url: impl Into<String>,
        pin: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            repository_url: repository_url.into(),
            pin: pin.into(),
            options: BTreeMap::new(),
            visibility: Visibility::Private,
        }
    }

    /// Sets the CPM options (builder pattern)
    pub fn with_options(mut self, options: BTreeMap<String, String>) -> Self {
        self.options = options;
        self
    }

    /// Sets the link visibility (builder pattern)
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Returns how this dependency is pinned
    pub fn pin_kind(&self) -> PinKind {
        PinKind::classify(&self.pin)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} ({}) [{}]",
            self.name, self.pin, self.repository_url, self.visibility
        )
    }
}
