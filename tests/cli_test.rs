//! Integration tests for the tfrun binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tfrun(project: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("tfrun"));
    cmd.current_dir(project.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("tfrun"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("release"))
        .stdout(predicate::str::contains("--report-json"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("tfrun"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_a_target() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("tfrun"));
    cmd.assert().failure().code(2);
    Ok(())
}

#[test]
fn build_unknown_environment_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    tfrun(&temp)
        .args(["build", "staging"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'staging' not found"))
        .stderr(predicate::str::contains("test, live"));
    assert!(!temp.path().join("build").exists());
    Ok(())
}

#[test]
fn release_honours_configured_environments() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".tfrun.yml"), "environments: [dev, prod]\n")?;
    tfrun(&temp)
        .args(["release", "test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("known: dev, prod"));
    Ok(())
}

#[test]
fn invalid_config_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".tfrun.yml"), "environments: [all]\n")?;
    tfrun(&temp)
        .arg("clean")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
    Ok(())
}

#[test]
fn config_without_token_creates_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let home = TempDir::new()?;
    tfrun(&temp)
        .arg("config")
        .env_remove("TF_CREDENTIALS")
        .env("HOME", home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("TF_CREDENTIALS"));
    assert!(!home.path().join(".terraform.d").exists());
    Ok(())
}

#[test]
fn config_writes_credentials() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let home = TempDir::new()?;
    tfrun(&temp)
        .arg("config")
        .env("TF_CREDENTIALS", "s3cr3t")
        .env("HOME", home.path())
        .assert()
        .success();
    let written = fs::read_to_string(
        home.path()
            .join(".terraform.d")
            .join("credentials.tfrc.json"),
    )?;
    assert!(written.contains("\"token\": \"s3cr3t\""));
    Ok(())
}

#[test]
fn clean_twice_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let dot = temp
        .path()
        .join("infrastructure")
        .join("test")
        .join(".terraform");
    fs::create_dir_all(&dot)?;
    fs::write(dot.join("terraform.tfstate"), "{}")?;

    tfrun(&temp).arg("clean").assert().success();
    assert!(!dot.exists());
    tfrun(&temp).arg("clean").assert().success();
    Ok(())
}

#[test]
fn reset_recreates_vendor() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join("vendor").join("modules"))?;
    tfrun(&temp).arg("reset").assert().success();
    assert!(temp.path().join("vendor").is_dir());
    assert!(fs::read_dir(temp.path().join("vendor"))?.next().is_none());
    Ok(())
}

#[test]
fn completions_mention_binary() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("tfrun"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tfrun"));
    Ok(())
}

#[test]
fn relative_project_flag_is_resolved() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let dot = temp
        .path()
        .join("infra-repo")
        .join("infrastructure")
        .join("live")
        .join(".terraform");
    fs::create_dir_all(&dot)?;

    tfrun(&temp)
        .args(["--project", "infra-repo", "clean"])
        .assert()
        .success();
    assert!(!dot.exists());
    Ok(())
}
