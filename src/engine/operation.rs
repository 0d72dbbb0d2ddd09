//! Named operations for dispatching from the command line.

use clap::ValueEnum;
use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use super::{CalcError, Calculator};

/// One of the calculator's operations, addressable by name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Operation {
    #[strum(to_string = "add")]
    Add,
    #[value(alias = "sub")]
    #[strum(to_string = "subtract", serialize = "sub")]
    Subtract,
    #[value(alias = "mul")]
    #[strum(to_string = "multiply", serialize = "mul")]
    Multiply,
    #[value(alias = "div")]
    #[strum(to_string = "divide", serialize = "div")]
    Divide,
    #[value(alias = "pow")]
    #[strum(to_string = "power", serialize = "pow")]
    Power,
    #[strum(to_string = "sqrt")]
    Sqrt,
}

impl Operation {
    /// Number of operands the operation consumes.
    pub fn arity(self) -> usize {
        match self {
            Operation::Sqrt => 1,
            _ => 2,
        }
    }

    /// Whether running the operation updates the calculator's last result.
    pub fn records_last_result(self) -> bool {
        matches!(self, Operation::Power | Operation::Sqrt)
    }

    /// Run the operation on `calc`. `b` is ignored by unary operations.
    pub fn apply(self, calc: &mut Calculator, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Operation::Add => Ok(calc.add(a, b)),
            Operation::Subtract => Ok(calc.subtract(a, b)),
            Operation::Multiply => Ok(calc.multiply(a, b)),
            Operation::Divide => calc.divide(a, b),
            Operation::Power => Ok(calc.power(a, b)),
            Operation::Sqrt => Ok(calc.square_root(a)),
        }
    }
}
