//! Terminal renderer: the `Result:` line plus dimmed detail.

use colored::Colorize;

use crate::output::{Evaluation, OutputRenderer, format_result};

/// Terminal output renderer.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, evaluation: &Evaluation) -> String {
        let operands: Vec<String> = evaluation.operands.iter().map(|o| o.to_string()).collect();
        let mut output = format!(
            "{}  {}\n",
            format_result(evaluation.result),
            format!("({} {})", evaluation.operation, operands.join(" ")).dimmed(),
        );

        if let Some(ref path) = evaluation.saved_to {
            output.push_str(&format!(
                "  {} Saved last result {} to {}\n",
                "✔".green().bold(),
                evaluation.last_result,
                path.bold(),
            ));
        }

        output
    }
}
