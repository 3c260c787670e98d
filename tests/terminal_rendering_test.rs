use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn offline_config(temp_dir: &TempDir) -> String {
    let config_path = temp_dir.path().join("cat-facts.toml");
    fs::write(
        &config_path,
        "endpoint = \"http://127.0.0.1:9/fact\"\ntimeout_ms = 500\n",
    )
    .unwrap();
    config_path.to_str().unwrap().to_string()
}

#[test]
fn test_no_color_output_is_plain() {
    let temp_dir = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("cat-facts")
        .args(["--config", &offline_config(&temp_dir)])
        .env("NO_COLOR", "1")
        .env("CLICOLOR_FORCE", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_clicolor_force_colors_piped_output() {
    let temp_dir = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("cat-facts")
        .args(["--config", &offline_config(&temp_dir)])
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["))
        .stdout(predicate::str::contains("( o.o )"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp_dir = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("cat-facts")
        .args(["--verbose", "--config", &offline_config(&temp_dir)])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stderr(predicate::str::contains("fallback"))
        .stdout(predicate::str::contains("fallback").not());
}
