//! calcstate — console calculator demo with a persisted last result (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod demo;
pub mod engine;
pub mod env;
pub mod logging;
pub mod output;
pub mod state;
