//! End-to-end runs against a mocked search endpoint and local git repositories.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use filter_catalog::{ExcludedOwners, Runner, RunnerConfig, RunnerError, TABLE_HEADER};
use serde_json::{json, Value};
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEMPLATE: &str = "---\ntitle: Community Filters\n---\n\n# Community Filters\n";

/// Clone-based tests need a `git` binary on `PATH`.
fn require_git() {
    let available = Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);
    assert!(available, "git must be installed to run the clone tests");
}

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(["-c", "user.name=Test", "-c", "user.email=test@example.com"])
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap();
    assert!(status.success(), "git {args:?} failed");
}

/// Creates a git repository at `root/dir_name` holding `files`.
fn create_repo(root: &Path, dir_name: &str, files: &[(&str, &str)]) -> PathBuf {
    let repo = root.join(dir_name);
    for (file, content) in files {
        let path = repo.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    git(&repo, &["init", "--quiet"]);
    git(&repo, &["add", "--all"]);
    git(&repo, &["commit", "--quiet", "-m", "Initial commit"]);
    repo
}

fn search_item(owner: &str, name: &str, clone_path: &Path) -> Value {
    json!({
        "id": 1,
        "name": name,
        "owner": { "login": owner, "id": 2 },
        "clone_url": Url::from_file_path(clone_path).unwrap().to_string(),
        "svn_url": format!("https://github.com/{owner}/{name}"),
        "full_name": format!("{owner}/{name}"),
        "default_branch": "main"
    })
}

async fn mock_search(items: Vec<Value>) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("q", "topic:regolith-filter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": items.len(),
            "incomplete_results": false,
            "items": items
        })))
        .mount(&server)
        .await;
    server
}

struct Site {
    temp: TempDir,
}

impl Site {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("community_base.md"), TEMPLATE).unwrap();
        Self { temp }
    }

    fn root(&self) -> &Path {
        self.temp.path()
    }

    fn output(&self) -> PathBuf {
        self.root().join("community-filters.md")
    }

    fn runner(&self, server: &MockServer) -> Runner {
        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
        let excluded: ExcludedOwners = ["Bedrock-OSS"].into_iter().collect();
        let config = RunnerConfig::new(
            "regolith-filter",
            excluded,
            self.root().join("community_base.md"),
            self.output(),
        )
        .with_scratch_root(self.root().join("tmp"))
        .with_clone_timeout(Duration::from_secs(120))
        .with_api_url(server.uri());
        Runner::new(config).unwrap()
    }
}

fn alice_foo(root: &Path) -> PathBuf {
    create_repo(
        root,
        "alice-foo",
        &[
            (
                "bar/filter.json",
                r#"{"filters":[{"runWith":"python"}],"description":"Bar filter"}"#,
            ),
            ("bar/README.md", "# Bar\n\nIgnored because the descriptor wins.\n"),
            ("docs/index.md", "# Not a filter\n"),
            ("README.md", "# Alice's filters\n"),
        ],
    )
}

#[tokio::test]
async fn catalogs_filters_and_skips_excluded_owner() {
    require_git();
    let site = Site::new();
    let alice = alice_foo(site.root());
    let baz = create_repo(
        site.root(),
        "bedrock-baz",
        &[("qux/filter.json", r#"{"filters":[{"runWith":"shell"}]}"#)],
    );
    fs::write(site.output(), "stale document\n| old | row |\n").unwrap();

    let server = mock_search(vec![
        search_item("alice", "foo", &alice),
        search_item("bedrock-oss", "baz", &baz),
    ])
    .await;

    let summary = site.runner(&server).run().await.unwrap();

    let expected = format!(
        "{TEMPLATE}\n{TABLE_HEADER}\n\
         | [bar](https://github.com/alice/foo/tree/main/bar) | alice | python | Bar filter |"
    );
    assert_eq!(fs::read_to_string(site.output()).unwrap(), expected);
    assert_eq!(summary.repositories_discovered, 1);
    assert_eq!(summary.repositories_scanned, 1);
    assert_eq!(summary.filters_added, 1);
    assert!(!summary.has_failures());

    // Scratch space is cleaned up after the run.
    assert_eq!(fs::read_dir(site.root().join("tmp")).unwrap().count(), 0);
}

#[tokio::test]
async fn clone_failure_skips_repository_only() {
    require_git();
    let site = Site::new();
    let bob = create_repo(
        site.root(),
        "bob-qux",
        &[
            ("zip/filter.json", r#"{"filters":[{"runWith":"nodejs"}]}"#),
            ("zip/readme.md", "# Zip\n\nThis filter converts assets.\n"),
            ("bad/filter.json", "{ broken"),
        ],
    );
    let missing = site.root().join("deleted-repository");

    let server = mock_search(vec![
        search_item("alice", "foo", &missing),
        search_item("bob", "qux", &bob),
    ])
    .await;

    let summary = site.runner(&server).run().await.unwrap();

    let document = fs::read_to_string(site.output()).unwrap();
    assert!(!document.contains("| alice |"));
    assert!(document.ends_with(
        "| [zip](https://github.com/bob/qux/tree/main/zip) | bob | nodejs | This filter converts assets. |"
    ));
    assert_eq!(summary.repositories_failed, 1);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].repository, "alice/foo");
    assert!(summary.failures[0].error.contains("git clone failed"));
    assert_eq!(summary.repositories_scanned, 1);
    assert_eq!(summary.filters_added, 1);
    assert_eq!(summary.filters_skipped, 1);
}

#[tokio::test]
async fn repeated_runs_produce_identical_documents() {
    require_git();
    let site = Site::new();
    let alice = create_repo(
        site.root(),
        "alice-foo",
        &[
            ("zeta/filter.json", r#"{"filters":[{"runWith":"python"}]}"#),
            ("alpha/filter.json", r#"{"filters":[{"runWith":"java"}]}"#),
            ("mid/filter.json", r#"{"filters":[{"runWith":"deno"}]}"#),
        ],
    );
    let server = mock_search(vec![search_item("alice", "foo", &alice)]).await;
    let runner = site.runner(&server);

    runner.run().await.unwrap();
    let first = fs::read(site.output()).unwrap();
    runner.run().await.unwrap();
    let second = fs::read(site.output()).unwrap();

    assert_eq!(first, second);
    let text = String::from_utf8(first).unwrap();
    let alpha = text.find("[alpha]").unwrap();
    let mid = text.find("[mid]").unwrap();
    let zeta = text.find("[zeta]").unwrap();
    assert!(alpha < mid && mid < zeta);
}

#[tokio::test]
async fn discovery_failure_leaves_document_untouched() {
    let site = Site::new();
    fs::write(site.output(), "previous").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation Failed",
            "documentation_url": "https://docs.github.com/rest/search"
        })))
        .mount(&server)
        .await;

    let result = site.runner(&server).run().await;

    assert!(matches!(result, Err(RunnerError::Discovery(_))));
    assert_eq!(fs::read_to_string(site.output()).unwrap(), "previous");
}

#[tokio::test]
async fn missing_template_fails_before_discovery() {
    let site = Site::new();
    fs::remove_file(site.root().join("community_base.md")).unwrap();
    fs::write(site.output(), "previous").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let result = site.runner(&server).run().await;

    assert!(matches!(result, Err(RunnerError::Publish(_))));
    assert_eq!(fs::read_to_string(site.output()).unwrap(), "previous");
}

#[tokio::test]
async fn empty_search_writes_header_only_table() {
    let site = Site::new();
    let server = mock_search(Vec::new()).await;

    let summary = site.runner(&server).run().await.unwrap();

    assert_eq!(
        fs::read_to_string(site.output()).unwrap(),
        format!("{TEMPLATE}\n{TABLE_HEADER}")
    );
    assert_eq!(summary.repositories_discovered, 0);
}
