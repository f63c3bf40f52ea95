// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color names accepted in rule files and the SGR escape framing.

/// Symbolic color names and the bash color code each one stands for.
pub const NAMED_COLORS: &[(&str, &str)] = &[
    ("red", "0;31"),
    ("yellow", "1;33"),
    ("green", "0;32"),
    ("blue", "0;34"),
    ("purple", "0;35"),
    ("light_gray", "0;37"),
];

/// Look up the code for a symbolic color name.
pub fn named(name: &str) -> Option<&'static str> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
}

/// Resolve a color spec from a rule file.
///
/// Known names map to their code; anything else is taken as a raw code body
/// such as `1;36`.
pub fn resolve(spec: &str) -> String {
    named(spec).unwrap_or(spec).to_string()
}

/// ANSI escape sequence helpers
pub mod escape {
    /// Reset all attributes
    pub const RESET: &str = "\x1b[0m";

    /// Opening sequence for a code body: ESC [ code m
    pub fn sgr(code: &str) -> String {
        format!("\x1b[{}m", code)
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
