// tests/integration/cli.rs
use predicates::prelude::*;

use crate::common::{SAMPLE, TempWorkspace, classify_lines};

#[test]
fn shows_help() {
    let ws = TempWorkspace::new("cli_help");
    classify_lines(&ws)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("classify_lines").and(predicate::str::contains("--keep-existing")));
}

#[test]
fn shows_version() {
    let ws = TempWorkspace::new("cli_version");
    classify_lines(&ws).arg("-V").assert().success().stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_and_full_together_exit_with_two() {
    let ws = TempWorkspace::new("cli_conflict");
    ws.write_file("in.txt", SAMPLE);

    classify_lines(&ws).args(["-s", "-f", "in.txt"]).assert().code(2).stdout(predicate::str::is_empty());
    assert!(ws.read("integers.txt").is_none());
}

#[test]
fn no_input_files_exit_with_two() {
    let ws = TempWorkspace::new("cli_no_files");
    classify_lines(&ws).arg("-f").assert().code(2).stderr(predicate::str::contains("FILE"));
}

#[test]
fn unknown_flag_exits_with_two() {
    let ws = TempWorkspace::new("cli_unknown");
    ws.write_file("in.txt", SAMPLE);
    classify_lines(&ws).args(["--bogus", "in.txt"]).assert().code(2);
}

#[test]
fn jobs_out_of_range_exit_with_two() {
    let ws = TempWorkspace::new("cli_jobs");
    ws.write_file("in.txt", SAMPLE);
    classify_lines(&ws)
        .args(["-j", "0", "in.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--jobs").and(predicate::str::contains("Usage:")));
    assert!(ws.read("integers.txt").is_none());
}

#[test]
fn bare_hyphen_operand_exits_with_two() {
    let ws = TempWorkspace::new("cli_hyphen");
    ws.write_file("in.txt", SAMPLE);

    classify_lines(&ws).args(["in.txt", "-"]).assert().code(2).stdout(predicate::str::is_empty());
    assert!(ws.read("integers.txt").is_none());
}

#[test]
fn prefix_may_start_with_hyphen() {
    let ws = TempWorkspace::new("cli_hyphen_prefix");
    ws.write_file("in.txt", SAMPLE);

    classify_lines(&ws).args(["-p", "-x", "in.txt"]).assert().success();
    assert_eq!(ws.read("-xintegers.txt").as_deref(), Some("10\n-2\n"));
}

#[test]
fn debug_logging_goes_to_stderr_only() {
    let ws = TempWorkspace::new("cli_log");
    ws.write_file("in.txt", SAMPLE);

    classify_lines(&ws)
        .env("CLASSIFY_LINES_LOG", "debug")
        .arg("in.txt")
        .assert()
        .success()
        .stdout("=== Statistics ===\nintegers: 2\nfloats: 1\nstrings: 1\n")
        .stderr(predicate::str::contains("classified"));
}
