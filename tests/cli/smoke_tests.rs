use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::TempDir;

fn tally() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tally_lines"));
    cmd.env_remove("TALLY_LINES_ROOT").env_remove("RUST_LOG");
    cmd
}

fn sample_project() -> TempDir {
    let temp = TempDir::new("cli_sample");
    temp.write_file("a.cs", "one\ntwo\nthree\n");
    temp.write_file("sub/b.vert", "void main()\n{}");
    temp.write_file("sub/bin/c.frag", "x\n".repeat(10));
    temp.write_file("readme.md", "1\n2\n3\n4\n5\n");
    temp
}

#[test]
fn shows_help() {
    tally()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tally_lines"))
        .stdout(predicate::str::contains("--exclude-dir"));
}

#[test]
fn prints_single_total_line() {
    let temp = sample_project();
    tally()
        .arg(temp.path())
        .assert()
        .success()
        .stdout("Total lines in .cs, .vert, and .frag files: 5\n");
}

#[test]
fn reads_root_from_environment() {
    let temp = sample_project();
    tally()
        .env("TALLY_LINES_ROOT", temp.path())
        .assert()
        .success()
        .stdout(predicate::str::ends_with("files: 5\n"));
}

#[test]
fn empty_tree_counts_zero() {
    let temp = TempDir::new("cli_empty");
    tally()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::ends_with("files: 0\n"));
}

#[test]
fn custom_extensions_and_excludes() {
    let temp = sample_project();
    tally()
        .arg(temp.path())
        .args(["--ext", "md,frag", "--exclude-dir", "sub"])
        .assert()
        .success()
        .stdout("Total lines in .md and .frag files: 5\n");
}

#[test]
fn json_report() {
    let temp = sample_project();
    let output = tally()
        .arg(temp.path())
        .args(["--format", "json", "--jobs", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_lines"], 5);
    assert_eq!(json["files"].as_array().unwrap().len(), 2);
    assert!(json["skipped"].as_array().unwrap().is_empty());
}

#[test]
fn missing_root_fails() {
    let temp = TempDir::new("cli_missing");
    tally()
        .arg(temp.path().join("does-not-exist"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn rejects_invalid_jobs() {
    tally()
        .args(["--jobs", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("512"));
}

#[test]
fn max_depth_limits_walk() {
    let temp = sample_project();
    tally()
        .arg(temp.path())
        .args(["--max-depth", "1"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("files: 3\n"));
}

#[cfg(unix)]
#[test]
fn strict_mode_reports_read_error_once() {
    let temp = sample_project();
    std::os::unix::fs::symlink(temp.path().join("gone.cs"), temp.path().join("dangling.cs"))
        .unwrap();

    let output = tally()
        .arg(temp.path())
        .args(["--strict", "--quiet"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("dangling.cs"));
    assert_eq!(stderr.matches("No such file or directory").count(), 1);
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_skipped_without_strict() {
    let temp = sample_project();
    std::os::unix::fs::symlink(temp.path().join("gone.cs"), temp.path().join("dangling.cs"))
        .unwrap();

    let output = tally()
        .arg(temp.path())
        .args(["--format", "json", "--quiet"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_lines"], 5);
    assert_eq!(json["skipped"].as_array().unwrap().len(), 1);
}
