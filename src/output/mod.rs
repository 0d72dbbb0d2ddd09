//! Result display and renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use std::io::{self, Write};

use serde::Serialize;

use crate::engine::Operation;

/// Format a result line: `Result: {result}`.
pub fn format_result(result: f64) -> String {
    format!("Result: {result}")
}

/// Write a result line to `out`.
pub fn write_result(out: &mut impl Write, result: f64) -> io::Result<()> {
    writeln!(out, "{}", format_result(result))
}

/// Print a result line to stdout.
pub fn display_result(result: f64) {
    println!("{}", format_result(result));
}

/// Outcome of evaluating one operation on a calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub operands: Vec<f64>,
    pub result: f64,
    /// The calculator's last result after the operation ran.
    pub last_result: f64,
    /// Where the last result was saved, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<String>,
}

/// Trait for rendering an evaluation to an output format.
pub trait OutputRenderer {
    /// Render the evaluation to a string.
    fn render(&self, evaluation: &Evaluation) -> String;
}
