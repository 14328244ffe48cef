//! Integration tests for the muster CLI.
// The cargo_bin function is marked deprecated in favor of the cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(manifest: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("muster.yml"), manifest).unwrap();
    temp
}

fn muster() -> Command {
    Command::new(cargo_bin("muster"))
}

const SIMPLE_MANIFEST: &str = r#"
name: test-project
commands:
  log: echo
  build: cargo --version
env:
  staging:
    DEPLOY_ENV: staging
"#;

#[test]
fn cli_shows_help() {
    muster()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "command and environment dispatcher",
        ));
}

#[test]
fn cli_shows_version() {
    muster()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn run_forwards_trailing_args_to_command() {
    let temp = setup_project(SIMPLE_MANIFEST);
    muster()
        .current_dir(temp.path())
        .args(["run", "log", "hello", "world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world"));
}

#[test]
fn run_undefined_command_reports_name_and_dispatches_nothing() {
    let temp = TempDir::new().unwrap();
    let marker = temp.path().join("ran");
    fs::write(
        temp.path().join("muster.yml"),
        format!("commands:\n  build: touch {}\n", marker.display()),
    )
    .unwrap();

    muster()
        .current_dir(temp.path())
        .args(["run", "deploy"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Command 'deploy' is not defined"));

    assert!(!marker.exists(), "the defined command must not run");
}

#[test]
fn run_failing_command_reports_full_invocation() {
    let temp = setup_project("commands:\n  bad: exit 9\n");
    muster()
        .current_dir(temp.path())
        .args(["run", "bad", "--now"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Command 'bad --now' failed"));
}

#[test]
fn run_group_selects_subcommand() {
    let temp = setup_project(
        "commands:\n  deploy:\n    staging: echo deployed-to-staging\n    production: exit 1\n",
    );
    muster()
        .current_dir(temp.path())
        .args(["run", "deploy", "staging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deployed-to-staging"));
}

#[test]
fn run_group_without_selector_lists_options() {
    let temp = setup_project(
        "commands:\n  deploy:\n    staging: echo a\n    production: echo b\n",
    );
    muster()
        .current_dir(temp.path())
        .args(["run", "deploy"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("production, staging"));
}

#[test]
fn run_sequence_stops_at_first_failure() {
    let temp = TempDir::new().unwrap();
    let marker = temp.path().join("after");
    fs::write(
        temp.path().join("muster.yml"),
        format!(
            "commands:\n  release:\n    - exit 1\n    - touch {}\n",
            marker.display()
        ),
    )
    .unwrap();

    muster()
        .current_dir(temp.path())
        .args(["run", "release"])
        .assert()
        .code(1);

    assert!(!marker.exists());
}

#[test]
fn env_prints_export_script() {
    let temp = setup_project(SIMPLE_MANIFEST);
    muster()
        .current_dir(temp.path())
        .args(["env", "staging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export DEPLOY_ENV=staging"));
}

#[test]
fn env_undefined_environment_reports_name() {
    let temp = setup_project(SIMPLE_MANIFEST);
    muster()
        .current_dir(temp.path())
        .args(["env", "production"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Environment 'production' is not defined",
        ));
}

#[test]
fn missing_manifest_hints_at_init() {
    let temp = TempDir::new().unwrap();
    muster()
        .current_dir(temp.path())
        .args(["run", "build"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No configuration found"))
        .stderr(predicate::str::contains("muster init"));
}

#[test]
fn malformed_manifest_is_a_structure_error() {
    let temp = setup_project("commands: [broken");
    muster()
        .current_dir(temp.path())
        .args(["run", "build"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("file structure"));
}

#[cfg(unix)]
#[test]
fn unreadable_manifest_is_an_access_error() {
    // A directory at the manifest path is readable-as-path but not as a file.
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("muster.yml");
    fs::create_dir(&dir).unwrap();

    muster()
        .current_dir(temp.path())
        .args(["run", "build"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unable to read configuration"));
}

#[test]
fn config_flag_overrides_discovery() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("elsewhere.yml");
    fs::write(&custom, "commands:\n  hi: echo from-custom\n").unwrap();

    muster()
        .current_dir(temp.path())
        .args(["--config", custom.to_str().unwrap(), "run", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from-custom"));
}

#[test]
fn manifest_is_discovered_from_subdirectory() {
    let temp = setup_project(SIMPLE_MANIFEST);
    let nested = temp.path().join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();

    muster()
        .current_dir(&nested)
        .args(["run", "log", "found"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found"));
}

#[test]
fn list_shows_commands_and_environments() {
    let temp = setup_project(SIMPLE_MANIFEST);
    muster()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("log"))
        .stdout(predicate::str::contains("staging"));
}

#[test]
fn list_json_is_machine_readable() {
    let temp = setup_project(SIMPLE_MANIFEST);
    let output = muster()
        .current_dir(temp.path())
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["name"], "test-project");
    assert_eq!(value["commands"], serde_json::json!(["build", "log"]));
    assert_eq!(value["env"], serde_json::json!(["staging"]));
}

#[test]
fn init_creates_usable_manifest() {
    let temp = TempDir::new().unwrap();
    muster()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    muster()
        .current_dir(temp.path())
        .args(["run", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello from muster"));
}

#[test]
fn init_refuses_existing_manifest() {
    let temp = setup_project(SIMPLE_MANIFEST);
    muster()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn completions_emit_script() {
    muster()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("muster"));
}
