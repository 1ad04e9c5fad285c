//! Link visibility of a declared dependency

use serde::{Deserialize, Serialize};
use std::fmt;

/// CMake link visibility keyword for a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Linked privately to the mod target
    #[default]
    Private,
    /// Linked and propagated to consumers
    Public,
    /// Propagated to consumers only
    Interface,
}

impl Visibility {
    /// Returns the CMake keyword for this visibility
    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Private => "PRIVATE",
            Visibility::Public => "PUBLIC",
            Visibility::Interface => "INTERFACE",
        }
    }

    /// Returns all visibilities
    pub fn all() -> &'static [Visibility] {
        &[
            Visibility::Private,
            Visibility::Public,
            Visibility::Interface,
        ]
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
