//! Update judgment logic for dependencies
//!
//! Tag pins are compared with the latest tag as opaque strings. Commit pins
//! may be abbreviated, so the pin and the latest commit are both cut to the
//! shorter of the two lengths before comparing.

use crate::domain::{CheckOutcome, Dependency, PinKind};

/// Compare a dependency's pin with the latest tag or commit on its remote
pub fn judge(dependency: &Dependency, latest: &str) -> CheckOutcome {
    match dependency.pin_kind() {
        PinKind::Tag => CheckOutcome::resolved(dependency, dependency.pin.as_str(), latest),
        PinKind::Commit => {
            let (current, latest) = common_prefix_pair(&dependency.pin, latest);
            CheckOutcome::resolved(dependency, current, latest)
        }
    }
}

/// Cut both strings to `min(len(a), len(b))` characters
pub fn common_prefix_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    let shortest = a.chars().count().min(b.chars().count());
    (take_chars(a, shortest), take_chars(b, shortest))
}

fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
