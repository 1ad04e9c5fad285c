//! geobuild-update - dependency update checker CLI
//!
//! Meant to run at the end of a geobuild configure step: reads the declared
//! dependencies, honours the GEOBUILD_UPDATE_CHECK switch and the 24 hour
//! cooldown, and prints one line per dependency.

use anyhow::Context;
use clap::Parser;
use geobuild_update::cli::CliArgs;
use geobuild_update::config::{CMakeVars, Settings};
use geobuild_update::cooldown::UpdateStamp;
use geobuild_update::logging::init_logging;
use geobuild_update::manifest::{load_dependencies, probe_project_dir};
use geobuild_update::orchestrator::UpdateChecker;
use geobuild_update::output::TerminalReporter;
use geobuild_update::registry::{GitHubResolver, HttpClient};
use std::io::{self, Read};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose, args.quiet);

    if args.no_color {
        colored::control::set_override(false);
    }

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let vars = if args.cmake_vars {
        let mut block = String::new();
        io::stdin()
            .read_to_string(&mut block)
            .context("failed to read CMake variables from stdin")?;
        CMakeVars::parse(&block)
    } else {
        CMakeVars::default()
    };

    let settings = Settings::resolve(&args, &vars, |key| std::env::var(key).ok())?;
    debug!(
        project_dir = %settings.project_dir.display(),
        build_dir = %settings.build_dir.display(),
        "resolved settings"
    );

    if !settings.check_enabled() {
        debug!("update check disabled, set GEOBUILD_UPDATE_CHECK=1 or pass --force");
        return Ok(ExitCode::SUCCESS);
    }

    let stamp = UpdateStamp::new(&settings.build_dir);
    if !settings.force && !stamp.is_due(SystemTime::now()) {
        debug!(stamp = %stamp.path().display(), "checked within the last 24 hours");
        return Ok(ExitCode::SUCCESS);
    }

    let dependencies = if settings.deps_required || settings.deps_file.exists() {
        load_dependencies(&settings.deps_file)?
    } else {
        debug!(path = %settings.deps_file.display(), "no dependency manifest");
        Vec::new()
    };

    let self_dependency = if settings.self_check {
        probe_project_dir(&settings.project_dir)
    } else {
        None
    };

    let checker = match HttpClient::with_timeout(settings.timeout) {
        Ok(client) => {
            let client = client.with_token(settings.github_token.clone());
            let resolver = match &settings.api_url {
                Some(url) => GitHubResolver::with_api_base(client, url.as_str()),
                None => GitHubResolver::new(client),
            };
            UpdateChecker::new(Arc::new(resolver))
        }
        Err(e) => {
            warn!("{}", e);
            UpdateChecker::unavailable()
        }
    }
    .with_self_dependency(self_dependency);

    let mut reporter = TerminalReporter::with_color(args.quiet, !args.no_color);
    if checker.check_for_updates(&dependencies, &mut reporter).await {
        if let Err(e) = stamp.touch() {
            warn!("failed to record update check: {}", e);
        }
    }

    Ok(ExitCode::SUCCESS)
}
