//! Pin classification
//!
//! A pin is either a release tag (`v1.2.0`, `2.3`) or a possibly abbreviated
//! commit hash (`abc123`). The kind decides which remote lookup is used.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a dependency is pinned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinKind {
    /// Pinned to a release tag
    Tag,
    /// Pinned to a commit hash
    Commit,
}

impl PinKind {
    /// Classify a pin string.
    ///
    /// Any pin containing a `.` or a `v` is a tag; everything else is
    /// treated as a commit.
    pub fn classify(pin: &str) -> Self {
        if pin.contains('.') || pin.contains('v') {
            PinKind::Tag
        } else {
            PinKind::Commit
        }
    }

    /// Returns the noun used in failure messages
    pub fn target_noun(&self) -> &'static str {
        match self {
            PinKind::Tag => "release",
            PinKind::Commit => "commit",
        }
    }
}

impl fmt::Display for PinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinKind::Tag => write!(f, "tag"),
            PinKind::Commit => write!(f, "commit"),
        }
    }
}
