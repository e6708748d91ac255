//! Test utilities and helper functions for the tablescrape test suite

use anyhow::Result;
use mockito::{Mock, Server};
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory for test output
#[allow(dead_code)]
pub fn create_test_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Writes `content` to `name` inside `dir` and returns the full path
#[allow(dead_code)]
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok(path)
}

/// Creates a test HTML document with the given body
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// A page with a header table, a bare-row table with a rowspan, and a
/// table nested inside a cell
#[allow(dead_code)]
pub fn create_report_html() -> String {
    create_test_html(
        "Quarterly report",
        r#"
    <h1>Results</h1>
    <table id="summary">
        <thead>
            <tr><th>Region</th><th>Q1</th><th>Q2</th></tr>
        </thead>
        <tbody>
            <tr><td>North</td><td>10</td><td>12</td></tr>
            <tr><td>South</td><td>7</td><td>9</td></tr>
        </tbody>
    </table>

    <table id="spans">
        <tr><td rowspan="2">Team A</td><td>Ann</td></tr>
        <tr><td>Bob</td></tr>
        <tr><td>Team B</td><td>Cid</td></tr>
    </table>

    <table id="outer">
        <tr>
            <td>Outer <em>cell</em></td>
            <td><table id="inner"><tr><td>inner</td></tr></table></td>
        </tr>
    </table>
"#,
    )
}

/// Sets up a mock HTTP server
#[allow(dead_code)]
pub async fn setup_mock_server() -> mockito::ServerGuard {
    Server::new_async().await
}

/// Creates a mock endpoint that returns HTML content
#[allow(dead_code)]
pub async fn create_html_mock(server: &mut Server, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error
#[allow(dead_code)]
pub async fn create_error_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}
