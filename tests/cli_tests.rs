//! End-to-end tests for the geobuild-update binary
//!
//! These tests verify:
//! - The update-check switch and the cooldown stamp
//! - Output lines for a full run against a mock GitHub API
//! - Exit codes for configuration errors

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MANIFEST: &str = r#"
[[dependency]]
repo = "gh:g-truc/glm"
tag = "1.0.1"

[[dependency]]
repo = "fmtlib/fmt"
tag = "10.2.1"
"#;

const CMAKE_LISTS: &str = r#"cmake_minimum_required(VERSION 3.21)
CPMAddPackage("gh:dankmeme01/geobuild@v2.3.0")
"#;

/// Binary with a clean environment
fn geobuild_update() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_geobuild-update"));
    cmd.env_remove("GEOBUILD_UPDATE_CHECK")
        .env_remove("GITHUB_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

fn create_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("geobuild.toml"), MANIFEST).unwrap();
    fs::write(dir.path().join("CMakeLists.txt"), CMAKE_LISTS).unwrap();
    dir
}

async fn mock_github() -> MockServer {
    let server = MockServer::start().await;
    let tags = [
        ("/repos/g-truc/glm/tags", "1.0.1"),
        ("/repos/fmtlib/fmt/tags", "11.0.2"),
        ("/repos/dankmeme01/geobuild/tags", "v2.3.0"),
    ];
    for (endpoint, latest) in tags {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": latest}])))
            .mount(&server)
            .await;
    }
    server
}

fn stamp(build_dir: &Path) -> std::path::PathBuf {
    build_dir.join("_geobuild-last-update.txt")
}

mod basics {
    use super::*;

    #[test]
    fn test_help() {
        geobuild_update()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--force"))
            .stdout(predicate::str::contains("--deps"))
            .stdout(predicate::str::contains("--api-url").not())
            .stdout(predicate::str::contains("elapsed summary lines"));
    }

    #[test]
    fn test_version() {
        geobuild_update()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_disabled_by_default() {
        let project = create_project();
        geobuild_update()
            .arg(project.path())
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
        assert!(!stamp(&project.path().join("build")).exists());
    }

    #[test]
    fn test_disabled_by_cmake_var() {
        let project = create_project();
        geobuild_update()
            .env("GEOBUILD_UPDATE_CHECK", "1")
            .arg("--cmake-vars")
            .write_stdin(format!(
                "CMAKE_SOURCE_DIR={};;GEOBUILD_UPDATE_CHECK=OFF;;",
                project.path().display()
            ))
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn test_missing_explicit_manifest() {
        let project = create_project();
        geobuild_update()
            .arg(project.path())
            .args(["--force", "--deps"])
            .arg(project.path().join("nope.toml"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn test_missing_project_dir() {
        let project = create_project();
        geobuild_update()
            .arg(project.path().join("missing"))
            .arg("--force")
            .assert()
            .failure()
            .stderr(predicate::str::contains("directory not found"));
    }

    #[test]
    fn test_invalid_manifest() {
        let project = create_project();
        fs::write(
            project.path().join("geobuild.toml"),
            "[[dependency]]\nrepo = \"fmtlib/fmt\"\ntag = \"\"\n",
        )
        .unwrap();
        geobuild_update()
            .arg(project.path())
            .arg("--force")
            .assert()
            .failure()
            .stderr(predicate::str::contains("empty tag"));
    }
}

mod runs {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_forced_run_prints_every_dependency() {
        let server = mock_github().await;
        let project = create_project();

        geobuild_update()
            .arg(project.path())
            .args(["--force", "--no-color", "--api-url", &server.uri()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Checking for CPM/Geode dep updates..."))
            .stdout(predicate::str::contains("glm is up to date (1.0.1)"))
            .stdout(predicate::str::contains(
                "Update available for fmt: 10.2.1 -> 11.0.2",
            ))
            .stdout(predicate::str::contains("geobuild is up to date (v2.3.0)"))
            .stdout(predicate::str::is_match(r"Update check complete in \d+\.\d{3}s").unwrap());

        assert!(stamp(&project.path().join("build")).is_file());
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_cmake_vars_enable_check() {
        let server = mock_github().await;
        let project = create_project();
        let build = project.path().join("out");

        geobuild_update()
            .args(["--cmake-vars", "--no-color", "--no-self-check", "--api-url", &server.uri()])
            .write_stdin(format!(
                "CMAKE_SOURCE_DIR={};;CMAKE_BINARY_DIR={};;GEOBUILD_UPDATE_CHECK=ON;;",
                project.path().display(),
                build.display()
            ))
            .assert()
            .success()
            .stdout(predicate::str::contains("Update available for fmt"))
            .stdout(predicate::str::contains("geobuild").not());

        assert!(stamp(&build).is_file());
        assert_eq!(server.received_requests().await.unwrap().len(), 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_recent_stamp_skips_check() {
        let server = mock_github().await;
        let project = create_project();
        let build = project.path().join("build");
        fs::create_dir_all(&build).unwrap();
        fs::write(stamp(&build), "0\n").unwrap();

        geobuild_update()
            .env("GEOBUILD_UPDATE_CHECK", "1")
            .arg(project.path())
            .args(["--api-url", &server.uri()])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_quiet_prints_only_updates() {
        let server = mock_github().await;
        let project = create_project();

        geobuild_update()
            .arg(project.path())
            .args(["--force", "--quiet", "--no-color", "--api-url", &server.uri()])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Update available for fmt: 10.2.1 -> 11.0.2",
            ))
            .stdout(predicate::str::contains("up to date").not())
            .stdout(predicate::str::contains("Checking for").not());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_failed_lookup_still_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let project = create_project();

        geobuild_update()
            .arg(project.path())
            .args(["--force", "--no-color", "--no-self-check", "--api-url", &server.uri()])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Failed to fetch latest release for https://github.com/fmtlib/fmt.git",
            ))
            .stderr(predicate::str::contains("500"));
    }
}
