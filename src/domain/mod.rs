//! Core domain models for geobuild-update
//!
//! This module contains the fundamental types used throughout the crate:
//! - Declared dependencies and their link visibility
//! - Pin classification (tag or commit)
//! - Per-dependency check outcomes

mod check_result;
mod dependency;
mod pin;
mod visibility;

pub use check_result::{CheckOutcome, CheckStatus};
pub use dependency::Dependency;
pub use pin::PinKind;
pub use visibility::Visibility;
