//! App-wide constants.
//!
//! Centralises the tool name, file names, and environment variable names
//! so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "calcstate";

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple (exported by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Fixed relative filename the demo persists its last result to.
pub const STATE_FILENAME: &str = "calculatorState.txt";

/// Local config filename (e.g. `.calcstate.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".calcstate.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "calcstate";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_PAUSE: &str = "CALCSTATE_PAUSE";
pub const ENV_COLOR: &str = "CALCSTATE_COLOR";
pub const ENV_LOG: &str = "CALCSTATE_LOG";
