// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! grepblush binary entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use grepblush::cli::Cli;
use grepblush::output_diagnostic::print_error;
use grepblush::run::{exit_codes, run};

fn main() -> ExitCode {
    // Usage errors exit with status 2 from inside clap.
    let cli = Cli::parse();
    let color_enabled = cli.color.enabled_for_stdout();

    match run(&cli, color_enabled, io::stdout().lock()) {
        Ok(_) => ExitCode::from(exit_codes::SUCCESS),
        // Nobody is reading anymore; stop quietly.
        Err(e) if e.is_broken_pipe() => ExitCode::from(exit_codes::SUCCESS),
        Err(e) => {
            print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}
