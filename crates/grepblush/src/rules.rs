// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule file parser.
//!
//! Parses one rule per line:
//!   ^ERROR=red
//!   ^WARN=1;33
//!   ^key=value=green
//!
//! The last `=` on a line separates the pattern from the color, so
//! patterns may contain `=` themselves.

use std::path::{Path, PathBuf};

use regex::bytes::Regex;
use thiserror::Error;

use crate::color;

/// Why a single rule line was rejected.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing '=' separator in {0:?}")]
    MissingSeparator(String),

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Errors that can occur when loading a rule file
#[derive(Debug, Error)]
pub enum RuleFileError {
    #[error("cannot open rule file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rule file line {line}: {source}")]
    Parse {
        /// 1-based line number in the rule file.
        line: usize,
        #[source]
        source: ParseError,
    },
}

/// A compiled pattern and the color code applied to lines it matches.
#[derive(Debug, Clone)]
pub struct Rule {
    source: String,
    regex: Regex,
    color: String,
}

impl Rule {
    /// Compile `pattern` and resolve `color_spec` through the color name table.
    pub fn new(pattern: &str, color_spec: &str) -> Result<Self, ParseError> {
        Ok(Self {
            source: pattern.to_string(),
            regex: Regex::new(pattern)?,
            color: color::resolve(color_spec),
        })
    }

    /// Pattern text as written in the rule file.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// Resolved color code body, e.g. `0;31`.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Whether the pattern matches at the very start of `line`.
    ///
    /// The match does not have to span the whole line. Leftmost-first search
    /// reports a match at offset 0 whenever one exists there.
    pub fn matches(&self, line: &[u8]) -> bool {
        self.regex.find(line).is_some_and(|m| m.start() == 0)
    }
}

/// Rules in file order. Earlier rules take precedence.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// First rule, in file order, whose pattern matches `line`.
    pub fn first_match(&self, line: &[u8]) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(line))
    }

    /// 1-based line numbers of empty-pattern rules that have rules after them.
    ///
    /// An empty pattern matches every line, so nothing below it can apply.
    pub fn shadowing_lines(&self) -> Vec<usize> {
        let last = self.rules.len().saturating_sub(1);
        self.rules
            .iter()
            .enumerate()
            .filter(|(idx, rule)| *idx < last && rule.pattern().is_empty())
            .map(|(idx, _)| idx + 1)
            .collect()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Read and parse the rule file at `path`.
///
/// The whole file is parsed before returning; the first bad line fails the load.
pub fn load(path: &Path) -> Result<RuleSet, RuleFileError> {
    let source = std::fs::read_to_string(path).map_err(|source| RuleFileError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&source)
}

/// Parse rule file contents into a rule set.
pub fn parse(source: &str) -> Result<RuleSet, RuleFileError> {
    let mut rules = Vec::new();

    for (lineno, line) in source.lines().enumerate() {
        let rule = parse_line(line).map_err(|source| RuleFileError::Parse {
            line: lineno + 1,
            source,
        })?;
        rules.push(rule);
    }

    Ok(RuleSet::new(rules))
}

/// Parse a single `REGEX=COLORSPEC` line. Trailing whitespace is ignored.
pub fn parse_line(line: &str) -> Result<Rule, ParseError> {
    let line = line.trim_end();
    let (pattern, color_spec) = line
        .rsplit_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(line.to_string()))?;
    Rule::new(pattern, color_spec)
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
