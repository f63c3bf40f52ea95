// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::input::{InputSource, STDIN_ARG};

const AFTER_HELP: &str = "\
MATCHFILE should contain lines of the form:

    regex=colorcode

Where colorcode is an unescaped bash color code (e.g. 1;36 for light cyan)
or one of (red, yellow, green, blue, purple, light_gray).

A regex only matches at the start of a line. In case of overlapping
matches, earlier lines take precedence.";

/// Color lines from stdin or a file according to regex rules
#[derive(Parser, Debug, Clone)]
#[command(name = "grepblush", version, about, after_help = AFTER_HELP)]
pub struct Cli {
    /// Rule file with one `regex=colorcode` rule per line
    #[arg(value_name = "MATCHFILE")]
    pub matchfile: PathBuf,

    /// Input file (stdin if '-', which is the default)
    #[arg(short = 'f', long = "file", value_name = "FILE", default_value = STDIN_ARG)]
    pub file: String,

    /// When to emit color escapes
    #[arg(long, value_enum, default_value = "always", env = "GREPBLUSH_COLOR")]
    pub color: ColorMode,

    /// Report rule and line counts on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn input(&self) -> InputSource {
        InputSource::from(self.file.as_str())
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Always color matching lines
    #[default]
    Always,
    /// Color only when stdout is a terminal
    Auto,
    /// Never color; pass every line through
    Never,
}

impl ColorMode {
    /// Decide whether to color, given whether stdout is a terminal.
    pub fn enabled(self, stdout_is_terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Auto => stdout_is_terminal,
            ColorMode::Never => false,
        }
    }

    /// Decide whether to color for the process's real stdout.
    pub fn enabled_for_stdout(self) -> bool {
        self.enabled(std::io::stdout().is_terminal())
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
