//! JSON output renderer.
//!
//! Outputs `{"operation": ..., "operands": [...], "result": ..., "last_result": ...}`.
//! Non-finite numbers serialise as `null`.

use crate::output::{Evaluation, OutputRenderer};

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, evaluation: &Evaluation) -> String {
        let mut out =
            serde_json::to_string_pretty(evaluation).unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }
}
