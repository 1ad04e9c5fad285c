//! Update checker coordinating one remote lookup per dependency
//!
//! This module provides:
//! - Fan-out of one tokio task per dependency, joined before returning
//! - Tag or commit lookup chosen from the pin
//! - Per-dependency failure isolation (errors and panics stay local)
//! - A run-once guard per checker

use crate::domain::{CheckOutcome, Dependency, PinKind};
use crate::output::Reporter;
use crate::registry::VersionResolver;
use crate::update::judge;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Checks declared dependencies for newer tags and commits
pub struct UpdateChecker {
    /// Remote lookup, absent when no HTTP client could be created
    resolver: Option<Arc<dyn VersionResolver>>,
    /// Synthetic dependency for the build tool itself
    self_dependency: Option<Dependency>,
    /// Set once the check has run
    checked: AtomicBool,
}

impl UpdateChecker {
    /// Create a checker using the given resolver
    pub fn new(resolver: Arc<dyn VersionResolver>) -> Self {
        Self {
            resolver: Some(resolver),
            self_dependency: None,
            checked: AtomicBool::new(false),
        }
    }

    /// Create a checker that cannot reach the network
    pub fn unavailable() -> Self {
        Self {
            resolver: None,
            self_dependency: None,
            checked: AtomicBool::new(false),
        }
    }

    /// Also check the build tool's own pin (builder pattern)
    pub fn with_self_dependency(mut self, dependency: Option<Dependency>) -> Self {
        self.self_dependency = dependency;
        self
    }

    /// Returns true once a check has run
    pub fn has_checked(&self) -> bool {
        self.checked.load(Ordering::SeqCst)
    }

    /// Check every dependency against its remote.
    ///
    /// Returns `false` without any request if the network is unavailable or
    /// a check already ran on this checker; `true` once all lookups have
    /// finished, whatever their individual results.
    pub async fn check_for_updates(
        &self,
        dependencies: &[Dependency],
        reporter: &mut dyn Reporter,
    ) -> bool {
        let Some(resolver) = self.resolver.as_ref() else {
            warn!("HTTP client unavailable, cannot check for updates");
            return false;
        };

        if self.checked.swap(true, Ordering::SeqCst) {
            debug!("update check already ran, skipping");
            return false;
        }

        let start = Instant::now();
        let targets: Vec<Dependency> = dependencies
            .iter()
            .cloned()
            .chain(self.self_dependency.clone())
            .collect();

        reporter.begin(targets.len());

        let mut tasks = JoinSet::new();
        let mut in_flight = HashMap::with_capacity(targets.len());
        for dependency in targets {
            let resolver = Arc::clone(resolver);
            let handle = tasks.spawn(check_dependency(resolver, dependency.clone()));
            in_flight.insert(handle.id(), dependency);
        }

        while let Some(joined) = tasks.join_next_with_id().await {
            let outcome = match joined {
                Ok((id, outcome)) => {
                    in_flight.remove(&id);
                    outcome
                }
                Err(e) => match in_flight.remove(&e.id()) {
                    Some(dependency) => {
                        warn!(dependency = %dependency.name, "update check task failed: {}", e);
                        CheckOutcome::failed(&dependency, format!("check task failed: {}", e))
                    }
                    None => {
                        warn!("update check task failed: {}", e);
                        continue;
                    }
                },
            };
            reporter.outcome(&outcome);
        }

        reporter.finish(start.elapsed());
        true
    }
}

/// Resolve and judge a single dependency
async fn check_dependency(
    resolver: Arc<dyn VersionResolver>,
    dependency: Dependency,
) -> CheckOutcome {
    let latest = match dependency.pin_kind() {
        PinKind::Tag => resolver.latest_tag(&dependency.repository_url).await,
        PinKind::Commit => resolver.latest_commit(&dependency.repository_url).await,
    };

    match latest {
        Ok(latest) => judge(&dependency, &latest),
        Err(e) => {
            debug!(dependency = %dependency.name, "lookup failed: {}", e);
            CheckOutcome::failed(&dependency, e.to_string())
        }
    }
}
