use crate::harness::TestContext;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn dry_run_prints_embedded_plan() {
    let ctx = TestContext::new();
    let project = ctx.create_dir("project");

    let output =
        ctx.cli_with_cygwin().args(["open", "--dry-run"]).arg(&project).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let plan: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["mode"], "embedded");
    assert_eq!(plan["name"], "Cygwin");
    assert_eq!(plan["args"], serde_json::json!(["--login", "-i"]));
    assert_eq!(plan["cwd"], project.display().to_string());
    assert_eq!(
        plan["env"],
        serde_json::json!([["CHERE_INVOKING", "1"], ["CYGWIN", "nodosfilewarning"]])
    );
}

#[test]
fn defaults_to_current_directory() {
    let ctx = TestContext::new();

    let output = ctx.cli_with_cygwin().args(["o", "--dry-run"]).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let plan: Value = serde_json::from_slice(&output.stdout).unwrap();
    let cwd = std::path::PathBuf::from(plan["cwd"].as_str().unwrap());
    assert_eq!(cwd.canonicalize().unwrap(), ctx.work_dir().canonicalize().unwrap());
}

#[test]
fn missing_selection_is_reported() {
    let ctx = TestContext::new();
    let missing = ctx.work_dir().join("removed-dir");

    ctx.cli_with_cygwin()
        .arg("open")
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Selected path does not exist"))
        .stderr(predicate::str::contains("removed-dir"));
}

#[test]
fn missing_shell_is_reported() {
    let ctx = TestContext::new();
    let shell = ctx.home().join("nowhere").join("bin").join("bash.exe");

    ctx.cli()
        .arg("--cygwin-path")
        .arg(&shell)
        .arg("open")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cygwin executable not found at:"));
}

#[cfg(unix)]
#[test]
fn starts_login_shell_in_parent_of_selected_file() {
    let ctx = TestContext::new();
    let file = ctx.create_file("project/src/main.rs");

    ctx.cli_with_cygwin()
        .arg("open")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("args=--login -i"))
        .stdout(predicate::str::contains("CHERE_INVOKING=1"))
        .stdout(predicate::str::contains("CYGWIN=nodosfilewarning"))
        .stdout(predicate::str::contains("project/src\n"));
}

#[cfg(unix)]
#[test]
fn shell_exit_code_becomes_cli_exit_code() {
    let ctx = TestContext::new();

    ctx.cli_with_cygwin().env("CYGTERM_TEST_EXIT", "5").arg("open").assert().code(5);
}
