// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input source selection: standard input or a named file.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use thiserror::Error;

/// Argument value that selects standard input.
pub const STDIN_ARG: &str = "-";

/// Errors that can occur when opening the input
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open input file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open input file {}: is a directory", .path.display())]
    Directory { path: PathBuf },
}

/// Where lines to colorize come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl From<&str> for InputSource {
    fn from(arg: &str) -> Self {
        if arg == STDIN_ARG {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl InputSource {
    /// Open the source as a buffered line reader.
    ///
    /// The file handle is owned by the returned reader and closed when it drops.
    pub fn open(&self) -> Result<Box<dyn BufRead>, InputError> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                if path.is_dir() {
                    return Err(InputError::Directory { path: path.clone() });
                }
                let file = File::open(path).map_err(|source| InputError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
