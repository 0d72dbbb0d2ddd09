//! The fixed demonstration sequence.
//!
//! Three calculator instances are used in turn: a plain one for the basic
//! operations, a second one whose `power`/`square_root` result is saved, and
//! a third one that loads that value back from disk.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use thiserror::Error;
use tracing::info;

use crate::engine::{CalcError, Calculator};
use crate::output::write_result;
use crate::state::StateError;

/// Errors that abort the demo.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error("failed to write demo output: {0}")]
    Output(#[from] io::Error),
}

/// Values observed while running the demo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoReport {
    /// Last result persisted by the second calculator.
    pub saved: f64,
    /// Last result read back by the third calculator.
    pub loaded: f64,
}

/// Run the demonstration, writing the transcript to `out` and persisting
/// state at `state_path`.
pub fn run(out: &mut impl Write, state_path: &Path) -> Result<DemoReport, DemoError> {
    let simple = Calculator::new();
    writeln!(out, "{}", "Simple Calculator:".bold())?;
    writeln!(out, "{}", simple.add(10.0, 5.0))?;
    writeln!(out, "{}", simple.subtract(10.0, 5.0))?;
    writeln!(out, "{}", simple.multiply(10.0, 5.0))?;
    writeln!(out, "{}", simple.divide(10.0, 5.0)?)?;

    let mut advanced = Calculator::new();
    writeln!(out)?;
    writeln!(out, "{}", "Advanced Calculator:".bold())?;
    write_result(out, advanced.add(20.0, 10.0))?;
    write_result(out, advanced.subtract(20.0, 10.0))?;
    write_result(out, advanced.multiply(20.0, 10.0))?;
    write_result(out, advanced.divide(20.0, 10.0)?)?;
    write_result(out, advanced.power(2.0, 3.0))?;
    write_result(out, advanced.square_root(16.0))?;

    advanced.save_state(state_path)?;
    let saved = advanced.last_result();
    info!(path = %state_path.display(), saved, "demo state saved");

    let mut another = Calculator::new();
    another.load_state(state_path)?;
    let loaded = another.last_result();
    info!(path = %state_path.display(), loaded, "demo state loaded");

    writeln!(out)?;
    writeln!(out, "{}", "Loaded state in another calculator instance:".bold())?;
    write_result(out, another.power(2.0, 3.0))?;
    out.flush()?;

    Ok(DemoReport { saved, loaded })
}
