//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::{self, IsTerminal, Write};

use colored::Colorize;

use crate::infrastructure::{InfraError, InfraResult};

/// Print an error message (no prefix) to stderr, red only on a terminal
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}", error_line(&msg.to_string(), io::stderr().is_terminal()));
}

fn error_line(msg: &str, colorize: bool) -> String {
    if colorize {
        msg.red().to_string()
    } else {
        msg.to_string()
    }
}

/// Write data output followed by a newline
pub fn data<W: Write>(out: &mut W, content: &str) -> InfraResult<()> {
    writeln!(out, "{}", content)
        .and_then(|_| out.flush())
        .map_err(|e| InfraError::io("write output", e))
}
