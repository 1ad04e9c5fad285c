//! End-to-end tests of the update checker against a mock GitHub API
//!
//! A manifest is parsed, every dependency is resolved through the real
//! HTTP client, and the collected output lines are inspected.

use geobuild_update::domain::{CheckStatus, Dependency};
use geobuild_update::manifest::{parse_dependencies, probe_self_dependency, DEPS_FILENAME};
use geobuild_update::orchestrator::UpdateChecker;
use geobuild_update::output::{BufferedReporter, BEGIN_MESSAGE};
use geobuild_update::registry::{GitHubResolver, HttpClient};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MANIFEST: &str = r#"
[[dependency]]
repo = "gh:g-truc/glm"
tag = "1.0.1"

[[dependency]]
repo = "https://github.com/fmtlib/fmt.git"
tag = "10.2.1"
visibility = "public"

[[dependency]]
repo = "geode-sdk/asp"
tag = "abc123"
name = "asp"

[[dependency]]
repo = "https://github.com/dankmeme01/broken.git"
tag = "deadbeef"
"#;

async fn mock_github() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/g-truc/glm/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "1.0.1"}])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/fmtlib/fmt/tags"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"name": "11.0.2"}, {"name": "10.2.1"}])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/geode-sdk/asp/commits"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"sha": "abc123def4567890"}])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/dankmeme01/broken/commits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    server
}

fn checker(server: &MockServer) -> UpdateChecker {
    let resolver = GitHubResolver::with_api_base(HttpClient::new().unwrap(), server.uri());
    UpdateChecker::new(Arc::new(resolver))
}

#[tokio::test]
async fn test_mixed_manifest() {
    let server = mock_github().await;
    let deps = parse_dependencies(MANIFEST, Path::new(DEPS_FILENAME)).unwrap();
    assert_eq!(deps.len(), 4);

    let mut reporter = BufferedReporter::new();
    assert!(checker(&server).check_for_updates(&deps, &mut reporter).await);

    let lines = reporter.lines();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], BEGIN_MESSAGE);
    assert!(lines[5].starts_with("Update check complete in "));
    assert!(lines[5].ends_with('s'));

    assert!(lines.contains(&"glm is up to date (1.0.1)".to_string()));
    assert!(lines.contains(&"Update available for fmt: 10.2.1 -> 11.0.2".to_string()));
    assert!(lines.contains(&"asp is up to date (abc123)".to_string()));
    assert!(lines.iter().any(|l| l.starts_with(
        "Failed to fetch latest commit for https://github.com/dankmeme01/broken.git: "
    )));
}

#[tokio::test]
async fn test_malformed_response_is_isolated() {
    let server = mock_github().await;
    let deps = parse_dependencies(MANIFEST, Path::new(DEPS_FILENAME)).unwrap();

    let mut reporter = BufferedReporter::new();
    checker(&server).check_for_updates(&deps, &mut reporter).await;

    let broken = reporter.outcome_for("broken").unwrap();
    assert!(broken.is_failed());
    assert!(broken.latest.is_none());
    match &broken.status {
        CheckStatus::Failed { reason } => assert!(reason.contains("no commits found")),
        other => panic!("Expected failure, got {other:?}"),
    }

    assert_eq!(
        reporter.outcomes().iter().filter(|o| !o.is_failed()).count(),
        3
    );
}

#[tokio::test]
async fn test_second_check_sends_no_requests() {
    let server = mock_github().await;
    let deps = parse_dependencies(MANIFEST, Path::new(DEPS_FILENAME)).unwrap();
    let checker = checker(&server);

    let mut first = BufferedReporter::new();
    assert!(checker.check_for_updates(&deps, &mut first).await);
    let sent = server.received_requests().await.unwrap().len();
    assert_eq!(sent, 4);

    let mut second = BufferedReporter::new();
    assert!(!checker.check_for_updates(&deps, &mut second).await);
    assert!(second.lines().is_empty());
    assert_eq!(server.received_requests().await.unwrap().len(), sent);
}

#[tokio::test]
async fn test_empty_manifest() {
    let server = mock_github().await;
    let deps = parse_dependencies("", Path::new(DEPS_FILENAME)).unwrap();
    assert!(deps.is_empty());

    let mut reporter = BufferedReporter::new();
    assert!(checker(&server).check_for_updates(&deps, &mut reporter).await);
    assert_eq!(reporter.lines().len(), 2);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_self_dependency_from_cmake_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/dankmeme01/geobuild/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "v2.4.0"}])))
        .expect(1)
        .mount(&server)
        .await;

    let cmake = r#"CPMAddPackage("gh:dankmeme01/geobuild@v2.3.0")"#;
    let checker = checker(&server).with_self_dependency(probe_self_dependency(cmake));

    let mut reporter = BufferedReporter::new();
    assert!(checker.check_for_updates(&[], &mut reporter).await);
    assert_eq!(
        reporter.outcome_for("geobuild").unwrap().to_string(),
        "Update available for geobuild: v2.3.0 -> v2.4.0"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lookups_run_concurrently() {
    let delay = Duration::from_millis(800);
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"name": "v1.0.0"}]))
                .set_delay(delay),
        )
        .mount(&server)
        .await;

    let deps: Vec<Dependency> = (0..5)
        .map(|i| {
            Dependency::new(
                format!("d{i}"),
                format!("https://github.com/geode-sdk/d{i}.git"),
                "v1.0.0",
            )
        })
        .collect();

    let mut reporter = BufferedReporter::new();
    let start = Instant::now();
    assert!(checker(&server).check_for_updates(&deps, &mut reporter).await);
    let elapsed = start.elapsed();

    assert_eq!(reporter.outcomes().len(), 5);
    assert!(reporter.outcomes().iter().all(|o| !o.is_failed()));
    assert!(
        elapsed < delay * 2,
        "five delayed lookups took {elapsed:?}, expected them to overlap"
    );
}
