//! # `docfetch` Binary Tests
//!
//! These tests run the compiled binary against a `wiremock` server and check
//! stdout, stderr and exit codes.

use assert_cmd::prelude::*;
use docfetch_test_utils::{js_bundle, js_bundle_for_text};
use predicates::prelude::*;
use std::process::{Command, Output};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Runs the binary with `args` off the async runtime and returns its output.
async fn run_docfetch(args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || {
        Command::cargo_bin("docfetch")
            .unwrap()
            .args(&args)
            .env_remove("DOCFETCH_USER_AGENT")
            .env("RUST_LOG", "off")
            .output()
            .unwrap()
    })
    .await
    .unwrap()
}

async fn mount_js(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_prints_decoded_documentation() {
    // Arrange
    let server = MockServer::start().await;
    mount_js(
        &server,
        "/main.js",
        js_bundle(r#"{"content":"BYUwNmD2Q==="}"#),
    )
    .await;

    // Act
    let output = run_docfetch(vec![format!("{}/main.js", server.uri())]).await;

    // Assert
    output.assert().success().stdout("hello\n");
}

#[tokio::test]
async fn test_existing_trailing_newline_is_not_doubled() {
    // Arrange
    let server = MockServer::start().await;
    let docs = "Usage notes\n\n- one\n- two\n";
    mount_js(&server, "/main.js", js_bundle_for_text(docs)).await;

    // Act
    let output = run_docfetch(vec![format!("{}/main.js", server.uri())]).await;

    // Assert
    output.assert().success().stdout(docs);
}

#[tokio::test]
async fn test_missing_payload_fails_with_empty_stdout() {
    // Arrange
    let server = MockServer::start().await;
    mount_js(&server, "/main.js", "window.x = 1;".to_string()).await;

    // Act
    let output = run_docfetch(vec![format!("{}/main.js", server.uri())]).await;

    // Assert
    output
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("No JSON.parse"));
}

#[tokio::test]
async fn test_empty_content_fails_with_empty_stdout() {
    // Arrange
    let server = MockServer::start().await;
    mount_js(&server, "/main.js", js_bundle(r#"{"content":""}"#)).await;

    // Act
    let output = run_docfetch(vec![format!("{}/main.js", server.uri())]).await;

    // Assert
    output
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("'content'"));
}

#[tokio::test]
async fn test_http_error_status_fails() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    // Act
    let output = run_docfetch(vec![format!("{}/main.js", server.uri())]).await;

    // Assert
    output
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("status 500"));
}

#[tokio::test]
async fn test_too_many_arguments_is_usage_error_without_network() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    // Act
    let output = run_docfetch(vec![
        format!("{}/a.js", server.uri()),
        format!("{}/b.js", server.uri()),
    ])
    .await;

    // Assert
    output
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage: docfetch <URL>"));
}

#[test]
fn test_no_arguments_is_usage_error() {
    Command::cargo_bin("docfetch")
        .unwrap()
        .env("RUST_LOG", "off")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage: docfetch <URL>"));
}

#[test]
fn test_help_exits_successfully() {
    Command::cargo_bin("docfetch")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("<URL>"));
}
