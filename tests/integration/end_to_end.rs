// tests/integration/end_to_end.rs
use predicates::prelude::*;

use crate::common::{SAMPLE, TempWorkspace, classify_lines};

#[test]
fn sample_input_writes_three_files_and_short_report() {
    let ws = TempWorkspace::new("e2e_sample");
    ws.write_file("in.txt", SAMPLE);

    classify_lines(&ws)
        .arg("in.txt")
        .assert()
        .success()
        .stdout("=== Statistics ===\nintegers: 2\nfloats: 1\nstrings: 1\n");

    assert_eq!(ws.read("integers.txt").as_deref(), Some("10\n-2\n"));
    assert_eq!(ws.read("floats.txt").as_deref(), Some("3.5\n"));
    assert_eq!(ws.read("strings.txt").as_deref(), Some("hello\n"));
}

#[test]
fn full_report_shows_measures() {
    let ws = TempWorkspace::new("e2e_full");
    ws.write_file("in.txt", SAMPLE);

    classify_lines(&ws).args(["-f", "in.txt"]).assert().success().stdout(
        "=== Statistics ===\n\
         integers:\n  count: 2\n  min: -2\n  max: 10\n  sum: 8\n  average: 4.0000000000\n\
         floats:\n  count: 1\n  min: 3.5\n  max: 3.5\n  sum: 3.5\n  average: 3.5000000000\n\
         strings:\n  count: 1\n  shortest: 5\n  longest: 5\n",
    );
}

#[test]
fn lines_are_trimmed_and_blank_lines_skipped() {
    let ws = TempWorkspace::new("e2e_trim");
    ws.write_file("in.txt", "  42 \r\n\n   \n\t1.5e2\nhello world\n.5\n");

    classify_lines(&ws).arg("in.txt").assert().success();

    assert_eq!(ws.read("integers.txt").as_deref(), Some("42\n"));
    assert_eq!(ws.read("floats.txt").as_deref(), Some("1.5e2\n.5\n"));
    assert_eq!(ws.read("strings.txt").as_deref(), Some("hello world\n"));
}

#[test]
fn control_characters_are_trimmed_and_lone_carriage_return_splits() {
    let ws = TempWorkspace::new("e2e_control");
    ws.write_file("in.txt", "\u{0}1\u{7}\r2\r\u{a0}3\n");

    classify_lines(&ws).arg("in.txt").assert().success().stdout(
        "=== Statistics ===\nintegers: 2\nstrings: 1\n",
    );

    assert_eq!(ws.read("integers.txt").as_deref(), Some("1\n2\n"));
    assert_eq!(ws.read("strings.txt").as_deref(), Some("\u{a0}3\n"));
}

#[test]
fn runaway_exponent_stops_only_its_own_file() {
    let ws = TempWorkspace::new("e2e_exponent");
    ws.write_file("wide.txt", "1.5\n1.0e-2000000000\n9\n");
    ws.write_file("huge.txt", "1.0e-1000000000000\n");
    ws.write_file("in.txt", SAMPLE);

    classify_lines(&ws)
        .args(["wide.txt", "huge.txt", "in.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("wide.txt").and(predicate::str::contains("scale gap")))
        .stdout("=== Statistics ===\nintegers: 2\nfloats: 2\nstrings: 2\n");

    assert_eq!(ws.read("floats.txt").as_deref(), Some("1.5\n3.5\n"));
    assert_eq!(ws.read("strings.txt").as_deref(), Some("1.0e-1000000000000\nhello\n"));
}

#[test]
fn huge_integers_are_summed_exactly() {
    let ws = TempWorkspace::new("e2e_bignum");
    ws.write_file("in.txt", "99999999999999999999999999\n1\n");

    classify_lines(&ws)
        .args(["-f", "in.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  sum: 100000000000000000000000000\n"))
        .stdout(predicate::str::contains("  average: 50000000000000000000000000.0000000000\n"));
}

#[test]
fn missing_file_is_skipped_and_others_processed() {
    let ws = TempWorkspace::new("e2e_missing");
    ws.write_file("in.txt", SAMPLE);

    classify_lines(&ws)
        .args(["absent.txt", "in.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("absent.txt").and(predicate::str::contains("does not exist")))
        .stdout(predicate::str::contains("integers: 2"));

    assert_eq!(ws.read("integers.txt").as_deref(), Some("10\n-2\n"));
}

#[test]
fn directory_input_is_skipped() {
    let ws = TempWorkspace::new("e2e_dir_input");
    ws.write_file("sub/in.txt", "7\n");

    classify_lines(&ws)
        .args(["sub", "sub/in.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("is a directory"))
        .stdout(predicate::str::contains("integers: 1"));
}

#[test]
fn several_files_with_many_jobs_match_single_job_counts() {
    let ws = TempWorkspace::new("e2e_jobs");
    let names: Vec<String> = (0..8)
        .map(|i| {
            let name = format!("in{i}.txt");
            ws.write_file(&name, format!("{i}\n{i}.5\nword{i}\n"));
            name
        })
        .collect();

    for jobs in ["1", "4"] {
        classify_lines(&ws)
            .args(["-j", jobs, "-o", jobs])
            .args(&names)
            .assert()
            .success()
            .stdout("=== Statistics ===\nintegers: 8\nfloats: 8\nstrings: 8\n");
    }

    let mut single: Vec<_> = ws.read("1/integers.txt").unwrap().lines().map(str::to_owned).collect();
    let mut multi: Vec<_> = ws.read("4/integers.txt").unwrap().lines().map(str::to_owned).collect();
    single.sort();
    multi.sort();
    assert_eq!(single, multi);
}

#[test]
fn prefix_and_output_dir_name_the_files() {
    let ws = TempWorkspace::new("e2e_prefix");
    ws.write_file("in.txt", SAMPLE);

    classify_lines(&ws).args(["-o", "out/nested", "-p", "sample-", "in.txt"]).assert().success();

    assert_eq!(ws.read("out/nested/sample-integers.txt").as_deref(), Some("10\n-2\n"));
    assert_eq!(ws.read("out/nested/sample-floats.txt").as_deref(), Some("3.5\n"));
    assert_eq!(ws.read("out/nested/sample-strings.txt").as_deref(), Some("hello\n"));
    assert!(ws.read("integers.txt").is_none());
}

#[test]
fn output_dir_that_is_a_file_fails_with_status_one() {
    let ws = TempWorkspace::new("e2e_bad_out");
    ws.write_file("in.txt", SAMPLE);
    ws.write_file("blocked", "");

    classify_lines(&ws)
        .args(["-o", "blocked", "in.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("blocked"))
        .stdout(predicate::str::is_empty());
}
