// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line colorizer.
//!
//! Streams input line by line, wrapping each line in the color of the first
//! rule that matches it. Lines no rule matches are written back untouched.

use std::io::{self, BufRead, Write};

use crate::color::escape;
use crate::rules::RuleSet;

/// Counts gathered over one colorizing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorizeStats {
    /// Lines read from the input.
    pub lines: u64,
    /// Lines written wrapped in a color.
    pub colored: u64,
}

/// Copy `input` to `output`, coloring lines according to `rules`.
///
/// Each line is flushed as soon as it is written so live input shows up
/// immediately. Returns once the input is exhausted.
pub fn colorize<R: BufRead, W: Write>(
    rules: &RuleSet,
    mut input: R,
    mut output: W,
) -> io::Result<ColorizeStats> {
    let mut stats = ColorizeStats::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        stats.lines += 1;

        // A matching rule with no color still claims the line.
        match rules.first_match(strip_terminator(&line)) {
            Some(rule) if !rule.color().is_empty() => {
                paint(rule.color(), &line, &mut output)?;
                stats.colored += 1;
            }
            _ => output.write_all(&line)?,
        }
        output.flush()?;
    }

    Ok(stats)
}

/// Write `line` framed by the escape for `code` and a reset.
///
/// The reset follows the line content directly, terminator included, so it
/// is emitted even for a final line without one.
pub fn paint<W: Write>(code: &str, line: &[u8], output: &mut W) -> io::Result<()> {
    output.write_all(escape::sgr(code).as_bytes())?;
    output.write_all(line)?;
    output.write_all(escape::RESET.as_bytes())
}

/// Line content without its `\n` or `\r\n` terminator.
fn strip_terminator(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(rest) => rest.strip_suffix(b"\r").unwrap_or(rest),
        None => line,
    }
}

#[cfg(test)]
#[path = "colorize_tests.rs"]
mod tests;
