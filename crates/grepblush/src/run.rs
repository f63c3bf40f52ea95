// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One filtering run: load rules, open the input, colorize to completion.

use std::io::{self, Write};

use thiserror::Error;

use crate::cli::Cli;
use crate::colorize::{colorize, ColorizeStats};
use crate::input::InputError;
use crate::output_diagnostic::{print_note, print_warning};
use crate::rules::{self, RuleFileError, RuleSet};

/// Process exit statuses
pub mod exit_codes {
    /// Input fully processed
    pub const SUCCESS: u8 = 0;
    /// Reading input or writing output failed mid-run
    pub const ERROR: u8 = 1;
    /// Bad arguments, rule file, or input path; nothing was processed
    pub const USAGE: u8 = 2;
}

/// Errors that end a run
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Rules(#[from] RuleFileError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed while filtering {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: io::Error,
    },
}

impl RunError {
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Rules(_) | RunError::Input(_) => exit_codes::USAGE,
            RunError::Io { .. } => exit_codes::ERROR,
        }
    }

    /// Downstream reader went away, e.g. output piped into `head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, RunError::Io { source, .. } if source.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Run the filter described by `cli`, writing colored lines to `output`.
///
/// Rules are loaded and validated in full before the input is opened.
pub fn run<W: Write>(
    cli: &Cli,
    color_enabled: bool,
    output: W,
) -> Result<ColorizeStats, RunError> {
    let rules = rules::load(&cli.matchfile)?;

    for line in rules.shadowing_lines() {
        print_warning(format_args!(
            "rule on line {} matches every line; later rules never apply",
            line
        ));
    }
    if cli.verbose {
        print_note(format_args!(
            "loaded {} rules from {}",
            rules.len(),
            cli.matchfile.display()
        ));
    }

    let input = cli.input();
    let reader = input.open()?;

    let passthrough = RuleSet::default();
    let active = if color_enabled {
        &rules
    } else {
        if cli.verbose {
            print_note("color disabled; passing input through");
        }
        &passthrough
    };

    let stats = colorize(active, reader, output).map_err(|source| RunError::Io {
        source_name: input.to_string(),
        source,
    })?;

    if cli.verbose {
        print_note(format_args!(
            "{} lines read from {}, {} colored",
            stats.lines,
            input,
            stats.colored
        ));
    }

    Ok(stats)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
