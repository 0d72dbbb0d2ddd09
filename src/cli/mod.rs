//! CLI command definitions and terminal helpers.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use std::io::{self, BufRead, Write};

/// Prompt on stderr and block until a line (or EOF) arrives on `input`.
pub fn wait_for_enter(input: &mut impl BufRead, prompt: &mut impl Write) -> io::Result<()> {
    use colored::Colorize;

    writeln!(prompt)?;
    write!(prompt, "{}", "Press Enter to exit...".dimmed())?;
    prompt.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
