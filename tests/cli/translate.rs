use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn translate_prints_cygdrive_path_with_escaped_space() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["translate", "C:\\Users\\Test User\\proj"])
        .assert()
        .success()
        .stdout("/cygdrive/c/Users/Test\\ User/proj\n");
}

#[test]
fn translate_accepts_alias_and_multiple_paths() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["t", "D:\\a\\\\b\\", "relative/path"])
        .assert()
        .success()
        .stdout("/cygdrive/d/a/b\nrelative/path\n");
}

#[test]
fn translate_resolve_maps_file_to_parent() {
    let ctx = TestContext::new();
    let file = ctx.create_file("src/lib.rs");
    let parent = ctx.work_dir().join("src");

    ctx.cli()
        .arg("translate")
        .arg("--resolve")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", cygterm::translate(&parent.to_string_lossy()))));
}

#[test]
fn translate_resolve_reports_missing_path() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["translate", "--resolve", "no-such-entry"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Selected path does not exist"))
        .stderr(predicate::str::contains("no-such-entry"));
}
