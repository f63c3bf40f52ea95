// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output on stderr.
//!
//! Standard output carries only the filtered lines, so every message about
//! the run itself goes through here. Messages are colored when stderr is a
//! terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use crate::color::escape;

/// Severity of a diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Note,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
            Level::Note => "Note",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Level::Error => "31",
            Level::Warning => "33",
            Level::Note => "2",
        }
    }
}

/// Print an error message to stderr.
pub fn print_error(msg: impl Display) {
    print(Level::Error, msg);
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl Display) {
    print(Level::Warning, msg);
}

/// Print an informational note to stderr (used by `--verbose`).
pub fn print_note(msg: impl Display) {
    print(Level::Note, msg);
}

fn print(level: Level, msg: impl Display) {
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    write_diagnostic(&mut stderr.lock(), level, msg, is_tty);
}

/// Write one diagnostic line with an explicit terminal flag.
fn write_diagnostic<W: Write>(
    writer: &mut W,
    level: Level,
    msg: impl Display,
    is_terminal: bool,
) {
    let _ = if is_terminal {
        writeln!(
            writer,
            "{}{}: {}{}",
            escape::sgr(level.code()),
            level.label(),
            msg,
            escape::RESET
        )
    } else {
        writeln!(writer, "{}: {}", level.label(), msg)
    };
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
