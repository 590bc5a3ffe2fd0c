//! End-to-end tests for the `sprig` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

fn sprig(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sprig").unwrap();
    cmd.arg("--cwd").arg(project).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

const TARGETS_TOML: &str = r#"
[targets]
ie = 10
node = 6
chrome = 0
firefox = true
"#;

#[test]
fn targets_csr() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "sprig.toml", TARGETS_TOML);

    let value = stdout_json(sprig(dir.path()).args(["targets", "--type", "csr"]));
    assert_eq!(
        value,
        json!({
            "targets": { "ie": 10, "chrome": 0, "firefox": true },
            "browserslist": ["ie >= 10", "chrome >= 0", "firefox >= 0"]
        })
    );
}

#[test]
fn targets_ssr() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "sprig.toml", TARGETS_TOML);

    let value = stdout_json(sprig(dir.path()).args(["targets", "--type", "ssr"]));
    assert_eq!(
        value,
        json!({ "targets": { "node": 6 }, "browserslist": ["node >= 6"] })
    );
}

#[test]
fn targets_from_package_json() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "package.json",
        r#"{ "name": "app", "sprig": { "targets": { "safari": 12 } } }"#,
    );

    let value = stdout_json(sprig(dir.path()).arg("targets"));
    assert_eq!(value["browserslist"], json!(["safari >= 12"]));
}

#[test]
fn css_production_hash() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "sprig.toml", "hash = true\n");

    let value = stdout_json(sprig(dir.path()).arg("css"));
    assert_eq!(
        value["plugins"][0]["args"][0],
        json!({
            "filename": "[name].[contenthash:8].css",
            "chunkFilename": "[name].[contenthash:8].chunk.css"
        })
    );

    let rules: Vec<&str> = value["module"]["rules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|rule| rule["name"].as_str().unwrap())
        .collect();
    assert_eq!(rules, vec!["css", "less"]);
}

#[test]
fn css_dev_has_no_hash() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "sprig.toml", "hash = true\n");

    let value = stdout_json(sprig(dir.path()).args(["css", "--dev"]));
    assert_eq!(value["plugins"][0]["args"][0]["filename"], "[name].css");
}

#[test]
fn css_with_style_loader_has_no_plugins() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "sprig.toml", "[styleLoader]\nbase = 1000\n");

    let value = stdout_json(sprig(dir.path()).arg("css"));
    assert_eq!(value["plugins"], json!([]));
    assert_eq!(
        value["module"]["rules"][0]["oneOf"][1]["use"][0],
        json!({ "name": "style-loader", "loader": "style-loader", "options": { "base": 1000 } })
    );
}

#[test]
fn routes_from_default_pages_dir() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/pages/index.tsx", "");
    write(dir.path(), "src/pages/users/_layout.tsx", "");
    write(dir.path(), "src/pages/users/[id].tsx", "");

    let value = stdout_json(sprig(dir.path()).arg("routes"));
    assert_eq!(
        value,
        json!([
            { "path": "/", "exact": true, "component": "@/pages/index.tsx" },
            {
                "path": "/users",
                "component": "@/pages/users/_layout.tsx",
                "routes": [
                    { "path": "/users/:id", "exact": true, "component": "@/pages/users/[id].tsx" }
                ]
            }
        ])
    );
}

#[test]
fn routes_flags_override_config() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "sprig.toml",
        "[routes]\nroot = \"missing\"\ncomponentPrefix = \"@/\"\n",
    );
    write(dir.path(), "app/views/about.jsx", "");

    let value = stdout_json(sprig(dir.path()).args([
        "routes",
        "--root",
        "app/views",
        "--component-prefix",
        "~/",
    ]));
    assert_eq!(
        value,
        json!([{ "path": "/about", "exact": true, "component": "~/views/about.jsx" }])
    );
}

#[test]
fn routes_multiple_dynamic_fails() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/pages/[a]/index.tsx", "");
    write(dir.path(), "src/pages/[b]/index.tsx", "");

    sprig(dir.path())
        .arg("routes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Multiple dynamic routes"));
}

#[test]
fn routes_missing_pages_dir_fails() {
    let dir = TempDir::new().unwrap();

    sprig(dir.path())
        .arg("routes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pages directory not found"));
}

#[test]
fn explicit_config_missing_fails() {
    let dir = TempDir::new().unwrap();

    sprig(dir.path())
        .args(["--config", "nope.toml", "targets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_target_value_fails() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "sprig.toml", "[targets]\nie = \"eleven\"\n");

    sprig(dir.path())
        .arg("targets")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let dir = TempDir::new().unwrap();

    let assert = sprig(dir.path()).args(["-v", "targets"]).assert().success();
    let output = assert.get_output();
    let stdout: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stdout, json!({ "targets": {}, "browserslist": [] }));
    assert!(String::from_utf8_lossy(&output.stderr).contains("configuration loaded"));
}
