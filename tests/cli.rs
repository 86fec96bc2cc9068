// ABOUTME: Integration tests for the docker-facts CLI commands.
// ABOUTME: Validates --help, list, init and resolve without an engine client.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn facts_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("docker-facts"))
}

/// A directory whose config points at a client that cannot exist.
fn dir_without_engine() -> tempfile::TempDir {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("docker-facts.yml"),
        "tool: no-such-engine-client-0f3a\n",
    )
    .unwrap();
    temp_dir
}

#[test]
fn help_shows_commands() {
    facts_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn list_prints_every_fact() {
    facts_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("docker\n"))
        .stdout(predicate::str::contains("docker_version"))
        .stdout(predicate::str::contains("docker_client_version"))
        .stdout(predicate::str::contains("docker_server_version"))
        .stdout(predicate::str::contains("docker_worker_join_token"))
        .stdout(predicate::str::contains("docker_manager_join_token"));
}

#[test]
fn init_creates_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("docker-facts.yml");

    facts_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    assert!(config_path.exists(), "docker-facts.yml should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("timeout: 1m 30s"));
    assert!(content.contains("prefix: \"br-\""));
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("docker-facts.yml");
    fs::write(&config_path, "tool: mine\n").unwrap();

    facts_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&config_path).unwrap(), "tool: mine\n");
}

#[test]
fn missing_engine_leaves_every_fact_unset() {
    let temp_dir = dir_without_engine();

    let output = facts_cmd()
        .current_dir(temp_dir.path())
        .args(["resolve", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let facts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let facts = facts.as_object().unwrap();
    assert_eq!(facts.len(), 6);
    assert!(facts.values().all(serde_json::Value::is_null));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"event\":\"warning\""));
}

#[test]
fn normal_mode_marks_unset_facts() {
    let temp_dir = dir_without_engine();

    facts_cmd()
        .current_dir(temp_dir.path())
        .args(["resolve", "docker_client_version"])
        .assert()
        .success()
        .stdout(predicate::eq("docker_client_version => (unset)\n"))
        .stderr(predicate::str::contains("warning:"));
}

#[test]
fn quiet_mode_suppresses_warnings() {
    let temp_dir = dir_without_engine();

    facts_cmd()
        .current_dir(temp_dir.path())
        .args(["resolve", "-q", "docker_worker_join_token"])
        .assert()
        .success()
        .stdout(predicate::eq("\n"))
        .stderr(predicate::str::contains("warning").not());
}

#[test]
fn unknown_fact_name_fails() {
    let temp_dir = dir_without_engine();

    facts_cmd()
        .current_dir(temp_dir.path())
        .args(["resolve", "docker_swarm_token"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("docker_swarm_token"));
}

#[test]
fn json_and_quiet_conflict() {
    facts_cmd()
        .args(["resolve", "--json", "--quiet"])
        .assert()
        .failure();
}

#[test]
fn explicit_config_path_is_used() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("custom.yml");
    fs::write(&config_path, "timeout: [\n").unwrap();

    facts_cmd()
        .args(["--config", config_path.to_str().unwrap(), "resolve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YAML"));
}

#[test]
fn malformed_facts_file_fails() {
    let temp_dir = dir_without_engine();
    let facts_path = temp_dir.path().join("facts.json");
    fs::write(&facts_path, "not json").unwrap();

    facts_cmd()
        .current_dir(temp_dir.path())
        .args(["resolve", "--facts-file", facts_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid facts file"));
}
