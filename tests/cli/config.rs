use crate::harness::TestContext;
use predicates::prelude::*;
use serde_json::Value;

fn planned_program(stdout: &[u8]) -> String {
    let plan: Value = serde_json::from_slice(stdout).expect("dry run prints JSON");
    plan["program"].as_str().expect("program is a string").to_string()
}

#[test]
fn shell_path_is_read_from_config_file() {
    let ctx = TestContext::new();
    let config = ctx.write_config(&format!(
        "[cygwin_terminal]\npath = '{}'\n",
        ctx.cygwin().shell().display()
    ));

    let output =
        ctx.cli().arg("--config").arg(&config).args(["open", "--dry-run"]).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(planned_program(&output.stdout), ctx.cygwin().shell().display().to_string());
}

#[test]
fn environment_overrides_config_file() {
    let ctx = TestContext::new();
    let config = ctx.write_config("[cygwin_terminal]\npath = '/elsewhere/bin/bash.exe'\n");

    let output = ctx
        .cli()
        .env("CYGTERM_CYGWIN_PATH", ctx.cygwin().shell())
        .arg("--config")
        .arg(&config)
        .args(["open", "--dry-run"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(planned_program(&output.stdout), ctx.cygwin().shell().display().to_string());
}

#[test]
fn config_file_named_by_environment_is_used() {
    let ctx = TestContext::new();
    let config = ctx.write_config(&format!(
        "[cygwin_terminal]\npath = '{}'\n",
        ctx.cygwin().shell().display()
    ));

    ctx.cli()
        .env("CYGTERM_CONFIG", &config)
        .args(["window", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mintty.exe"));
}

#[test]
fn missing_explicit_config_file_fails() {
    let ctx = TestContext::new();
    let missing = ctx.home().join("missing.toml");

    ctx.cli()
        .arg("--config")
        .arg(&missing)
        .args(["open", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn unknown_config_keys_are_rejected() {
    let ctx = TestContext::new();
    let config = ctx.write_config("[cygwin_terminal]\nshell = 'bash'\n");

    ctx.cli()
        .arg("--config")
        .arg(&config)
        .args(["open", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}

#[cfg(unix)]
#[test]
fn default_shell_path_is_used_without_configuration() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["open", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cygwin executable not found at: C:\\cygwin64\\bin\\bash.exe",
        ));
}
