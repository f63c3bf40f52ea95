// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for grepblush integration tests.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// Rules used by most end-to-end scenarios.
pub const LOG_RULES: &str = "^ERROR=red\n^WARN=yellow\n";

/// Create a temporary file holding `content`.
pub fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Path of a temp file as a string argument.
pub fn arg(file: &NamedTempFile) -> &str {
    file.path().to_str().unwrap()
}

/// Wrap `line` the way grepblush colors it.
pub fn colored(code: &str, line: &str) -> String {
    format!("\x1b[{}m{}\x1b[0m", code, line)
}
