//! Arithmetic engine.
//!
//! A single flat [`Calculator`] exposes the four basic operations, which are
//! pure, plus `power` and `square_root`, which also record their output as
//! the calculator's last result. Persistence of that value lives in
//! [`crate::state`].

pub mod operation;

use thiserror::Error;

pub use operation::Operation;

/// Errors raised by arithmetic operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero is not allowed")]
    DivisionByZero,
}

/// Calculator holding a single remembered value.
///
/// `last_result` starts at `0.0` and only changes through [`power`],
/// [`square_root`], or a state load.
///
/// [`power`]: Calculator::power
/// [`square_root`]: Calculator::square_root
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Calculator {
    last_result: f64,
}

impl Calculator {
    /// Create a calculator with a last result of `0.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator seeded with a known last result.
    #[cfg(test)]
    pub(crate) fn with_last_result(value: f64) -> Self {
        Self { last_result: value }
    }

    /// The most recent `power`/`square_root` result (or loaded value).
    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    pub(crate) fn set_last_result(&mut self, value: f64) {
        self.last_result = value;
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Divide `a` by `b`.
    ///
    /// Fails when `b` compares equal to zero (`-0.0` included). No epsilon.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a / b)
    }

    /// Raise `a` to the power `b` and remember the result.
    pub fn power(&mut self, a: f64, b: f64) -> f64 {
        self.last_result = a.powf(b);
        self.last_result
    }

    /// Square root of `a`, remembered as the last result.
    ///
    /// Negative input yields NaN.
    pub fn square_root(&mut self, a: f64) -> f64 {
        self.last_result = a.sqrt();
        self.last_result
    }
}
