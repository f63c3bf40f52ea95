// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end tests for the grepblush binary.
//!
//! Each test writes a rule file to a temp location, pipes input through the
//! binary and checks stdout byte for byte.

#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

mod common;

use assert_cmd::Command;
use common::{arg, colored, write_file, LOG_RULES};
use predicates::prelude::*;

fn grepblush() -> Command {
    let mut cmd = Command::cargo_bin("grepblush").unwrap();
    cmd.env_remove("GREPBLUSH_COLOR");
    cmd
}

// =============================================================================
// Coloring
// =============================================================================

#[test]
fn colors_stdin_by_first_matching_rule() {
    let rules = write_file(LOG_RULES);

    let expected = format!(
        "{}{}ok\n",
        colored("0;31", "ERROR: bad\n"),
        colored("1;33", "WARN: careful\n")
    );

    grepblush()
        .arg(arg(&rules))
        .write_stdin("ERROR: bad\nWARN: careful\nok\n")
        .assert()
        .success()
        .stdout(expected)
        .stderr("");
}

#[test]
fn reads_from_input_file() {
    let rules = write_file(LOG_RULES);
    let input = write_file("WARN: disk 91%\n");

    grepblush()
        .args(["-f", arg(&input), arg(&rules)])
        .assert()
        .success()
        .stdout(colored("1;33", "WARN: disk 91%\n"));
}

#[test]
fn dash_reads_stdin() {
    let rules = write_file(LOG_RULES);

    grepblush()
        .args(["--file", "-", arg(&rules)])
        .write_stdin("ERROR\n")
        .assert()
        .success()
        .stdout(colored("0;31", "ERROR\n"));
}

#[test]
fn earlier_rule_takes_precedence() {
    let rules = write_file("^E=blue\n^ERROR=red\n");

    grepblush()
        .arg(arg(&rules))
        .write_stdin("ERROR: x\n")
        .assert()
        .success()
        .stdout(colored("0;34", "ERROR: x\n"));
}

#[test]
fn pattern_may_contain_separator() {
    let rules = write_file("^key=value=green\n");

    grepblush()
        .arg(arg(&rules))
        .write_stdin("key=value\nkey=other\n")
        .assert()
        .success()
        .stdout(format!("{}key=other\n", colored("0;32", "key=value\n")));
}

#[test]
fn last_line_without_newline_gets_reset() {
    let rules = write_file(LOG_RULES);

    grepblush()
        .arg(arg(&rules))
        .write_stdin("ok\nERROR: end")
        .assert()
        .success()
        .stdout(format!("ok\n{}", colored("0;31", "ERROR: end")));
}

#[test]
fn empty_rule_file_passes_input_through() {
    let rules = write_file("");

    grepblush()
        .arg(arg(&rules))
        .write_stdin("ERROR: bad\r\nplain\n")
        .assert()
        .success()
        .stdout("ERROR: bad\r\nplain\n");
}

#[test]
fn color_never_passes_input_through() {
    let rules = write_file(LOG_RULES);

    grepblush()
        .args(["--color", "never", arg(&rules)])
        .write_stdin("ERROR: bad\n")
        .assert()
        .success()
        .stdout("ERROR: bad\n");
}

#[test]
fn color_auto_is_off_when_piped() {
    let rules = write_file(LOG_RULES);

    grepblush()
        .arg(arg(&rules))
        .env("GREPBLUSH_COLOR", "auto")
        .write_stdin("ERROR: bad\n")
        .assert()
        .success()
        .stdout("ERROR: bad\n");
}

#[test]
fn verbose_reports_counts_on_stderr() {
    let rules = write_file(LOG_RULES);

    grepblush()
        .args(["-v", arg(&rules)])
        .write_stdin("ERROR: bad\nok\n")
        .assert()
        .success()
        .stdout(format!("{}ok\n", colored("0;31", "ERROR: bad\n")))
        .stderr(
            predicate::str::contains("loaded 2 rules")
                .and(predicate::str::contains("2 lines read from stdin, 1 colored")),
        );
}

#[test]
fn wildcard_before_other_rules_warns() {
    let rules = write_file("=purple\n^ERROR=red\n");

    grepblush()
        .arg(arg(&rules))
        .write_stdin("ERROR\n")
        .assert()
        .success()
        .stdout(colored("0;35", "ERROR\n"))
        .stderr(predicate::str::contains(
            "Warning: rule on line 1 matches every line",
        ));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn missing_separator_is_fatal() {
    let rules = write_file("^ERROR=red\njusttext\n");

    grepblush()
        .arg(arg(&rules))
        .write_stdin("ERROR: bad\n")
        .assert()
        .code(2)
        .stdout("")
        .stderr(
            predicate::str::contains("line 2")
                .and(predicate::str::contains("justtext"))
                .and(predicate::str::starts_with("Error:")),
        );
}

#[test]
fn invalid_regex_is_fatal() {
    let rules = write_file("(unclosed=red\n");

    grepblush()
        .arg(arg(&rules))
        .write_stdin("anything\n")
        .assert()
        .code(2)
        .stdout("")
        .stderr(
            predicate::str::contains("line 1").and(predicate::str::contains("invalid pattern")),
        );
}

#[test]
fn missing_rule_file_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("no-such.rules");

    grepblush()
        .arg(path.to_str().unwrap())
        .write_stdin("ERROR\n")
        .assert()
        .code(2)
        .stdout("")
        .stderr(
            predicate::str::contains("cannot open rule file")
                .and(predicate::str::contains("no-such.rules")),
        );
}

#[test]
fn missing_input_file_is_fatal() {
    let rules = write_file(LOG_RULES);
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("no-such.log");

    grepblush()
        .args(["-f", path.to_str().unwrap(), arg(&rules)])
        .assert()
        .code(2)
        .stdout("")
        .stderr(
            predicate::str::contains("cannot open input file")
                .and(predicate::str::contains("no-such.log")),
        );
}

#[test]
fn missing_matchfile_argument_is_usage_error() {
    grepblush()
        .write_stdin("ERROR\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("MATCHFILE"));
}

#[test]
fn too_many_arguments_is_usage_error() {
    let rules = write_file(LOG_RULES);

    grepblush()
        .args([arg(&rules), arg(&rules)])
        .assert()
        .code(2);
}

#[test]
fn help_describes_rule_format() {
    grepblush()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("regex=colorcode")
                .and(predicate::str::contains("earlier lines take precedence")),
        );
}
