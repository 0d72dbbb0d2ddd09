//! Clap argument types and operand validation.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use calcstate::engine::Operation;
use calcstate::output::Evaluation;

/// Console calculator demo with a persisted last result.
///
/// Run without a subcommand to play the built-in demonstration.
#[derive(Parser, Debug)]
#[command(name = "calcstate", version = calcstate::constants::VERSION)]
pub struct Cli {
    /// Disable coloured output.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Run the demonstration sequence (the default).
    Demo(DemoArgs),

    /// Evaluate a single operation.
    Eval(EvalArgs),

    /// Inspect or clear the saved last result.
    State {
        /// State file to use instead of the configured one.
        #[arg(long, global = true)]
        state_file: Option<PathBuf>,

        #[command(subcommand)]
        action: StateAction,
    },

    /// Print version and build information.
    Version,
}

/// Arguments for the `demo` subcommand.
#[derive(Parser, Debug, Default)]
pub struct DemoArgs {
    /// Exit straight away instead of waiting for Enter.
    #[arg(long, default_value_t = false)]
    pub no_pause: bool,
}

/// Arguments for the `eval` subcommand.
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Operation to run.
    pub operation: Operation,

    /// First operand.
    #[arg(allow_negative_numbers = true)]
    pub a: f64,

    /// Second operand (omit for `sqrt`).
    #[arg(allow_negative_numbers = true)]
    pub b: Option<f64>,

    /// Save the calculator's last result afterwards.
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// State file to save to instead of the configured one.
    #[arg(long, requires = "save")]
    pub state_file: Option<PathBuf>,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// State management subcommands.
#[derive(clap::Subcommand, Debug)]
pub enum StateAction {
    /// Load the saved value and display it.
    Show,
    /// Print the state file path.
    Path,
    /// Delete the state file.
    Clear,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render an evaluation using the renderer for this format.
    pub fn render(&self, evaluation: &Evaluation) -> String {
        use calcstate::output::OutputRenderer;
        match self {
            OutputFormat::Terminal => calcstate::output::terminal::TerminalRenderer.render(evaluation),
            OutputFormat::Json => calcstate::output::json::JsonRenderer.render(evaluation),
        }
    }
}

impl EvalArgs {
    /// Check the operand count against the operation's arity.
    ///
    /// Returns `(a, b)`; `b` is `NaN` for unary operations.
    pub fn operands(&self) -> Result<(f64, f64), String> {
        match (self.operation.arity(), self.b) {
            (1, None) => Ok((self.a, f64::NAN)),
            (1, Some(_)) => Err(format!("{} takes exactly one operand", self.operation)),
            (_, Some(b)) => Ok((self.a, b)),
            (_, None) => Err(format!("{} takes two operands", self.operation)),
        }
    }

    /// The operands as given, for display.
    pub fn operand_list(&self) -> Vec<f64> {
        std::iter::once(self.a).chain(self.b).collect()
    }
}
