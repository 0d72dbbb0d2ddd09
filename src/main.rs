//! calcstate — console calculator demo with a persisted last result.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use calcstate::config;
use calcstate::constants;
use calcstate::demo;
use calcstate::engine;
use calcstate::env;
use calcstate::logging;
use calcstate::output;
use calcstate::state;

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use cli::args::{Cli, Command, DemoArgs, EvalArgs, StateAction};
use config::Config;
use env::Env;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let env = Env::real();
    logging::init(&env);

    let work_dir = std::env::current_dir().context("could not determine working directory")?;
    let config = Config::load(Some(&work_dir), &env).context("failed to load configuration")?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    match cli.command.unwrap_or(Command::Demo(DemoArgs::default())) {
        Command::Demo(args) => run_demo(args, &config),
        Command::Eval(args) => run_eval(args, &config),
        Command::State { state_file, action } => run_state(action, state_file, &config),
        Command::Version => run_version(),
    }
}

/// Print version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Play the demonstration against the fixed state file.
fn run_demo(args: DemoArgs, config: &Config) -> Result<()> {
    let state_path = Path::new(constants::STATE_FILENAME);

    {
        let mut out = io::stdout().lock();
        demo::run(&mut out, state_path).context("demo failed")?;
    }

    let stdin = io::stdin();
    if config.demo.pause && !args.no_pause && stdin.is_terminal() {
        cli::wait_for_enter(&mut stdin.lock(), &mut io::stderr())
            .context("failed to read from stdin")?;
    }

    Ok(())
}

/// Evaluate one operation on a fresh calculator.
fn run_eval(args: EvalArgs, config: &Config) -> Result<()> {
    let (a, b) = args.operands().map_err(|e| anyhow!(e))?;

    let mut calc = engine::Calculator::new();
    let result = args
        .operation
        .apply(&mut calc, a, b)
        .with_context(|| format!("{} failed", args.operation))?;

    let saved_to = if args.save {
        if !args.operation.records_last_result() {
            tracing::warn!(
                operation = %args.operation,
                last_result = calc.last_result(),
                "operation does not update the last result; saving the unchanged value"
            );
        }
        let path = args.state_file.clone().unwrap_or_else(|| config.state.file.clone());
        calc.save_state(&path).context("failed to save state")?;
        Some(path.display().to_string())
    } else {
        None
    };

    let evaluation = output::Evaluation {
        operation: args.operation,
        operands: args.operand_list(),
        result,
        last_result: calc.last_result(),
        saved_to,
    };
    print!("{}", args.format.render(&evaluation));

    Ok(())
}

/// Inspect or clear the saved last result.
fn run_state(action: StateAction, state_file: Option<PathBuf>, config: &Config) -> Result<()> {
    use colored::Colorize;

    let store = state::StateStore::new(state_file.unwrap_or_else(|| config.state.file.clone()));

    match action {
        StateAction::Show => {
            let value = store.load().context("failed to load state")?;
            output::display_result(value);
        }
        StateAction::Path => {
            println!("{}", store.path().display());
        }
        StateAction::Clear => {
            if store.remove().context("failed to clear state")? {
                println!(
                    "  {} Removed {}.",
                    "✔".green().bold(),
                    store.path().display()
                );
            } else {
                println!("No state file at {}.", store.path().display());
            }
        }
    }

    Ok(())
}
