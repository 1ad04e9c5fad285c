//! geobuild-update - dependency update checker for geobuild projects
//!
//! This library checks the CPM dependencies a geobuild mod declares against
//! their GitHub repositories:
//! - Tag pins are compared with the newest tag
//! - Commit pins are compared with the newest commit (abbreviations allowed)
//! - geobuild's own pin is read from the project's CMakeLists.txt

pub mod cli;
pub mod config;
pub mod cooldown;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
pub mod update;
