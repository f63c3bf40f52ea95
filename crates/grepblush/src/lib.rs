// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented text coloring filter.
//!
//! Reads lines from stdin or a file, tests each against an ordered list of
//! regex rules loaded from a rule file, and writes the line wrapped in the
//! ANSI color of the first rule that matches at the start of the line.
//!
//! ```text
//! $ cat rules
//! ^ERROR=red
//! ^WARN=yellow
//! $ make 2>&1 | grepblush rules
//! ```
//!
//! The library exposes the pieces so they can be driven directly:
//!
//! ```
//! let rules = grepblush::rules::parse("^ERROR=red\n").unwrap();
//! let mut out = Vec::new();
//! grepblush::colorize::colorize(&rules, "ERROR: bad\nok\n".as_bytes(), &mut out).unwrap();
//! assert_eq!(out, b"\x1b[0;31mERROR: bad\n\x1b[0mok\n");
//! ```

pub mod cli;
pub mod color;
pub mod colorize;
pub mod input;
pub mod output_diagnostic;
pub mod rules;
pub mod run;
