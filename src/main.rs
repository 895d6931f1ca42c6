//! Command-line front end.
//!
//! Thin glue around the [`Orchestrator`]: load configuration, check the
//! credential precondition, then run one task or an interactive session.

use cadre_ai::agent::Mode;
use cadre_ai::config::{self, CadreConfig};
use cadre_ai::error::CadreError;
use cadre_ai::logging::{self, LogLevel, LoggingConfig};
use cadre_ai::orchestrator::Orchestrator;
use cadre_ai::prelude::ExecutionResult;
use clap::Parser;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cadre", version, about = "Agent orchestration scaffold")]
struct Cli {
    /// Path to the configuration file (default: ./cadre.toml, then XDG)
    #[arg(long, env = "CADRE_CONFIG")]
    config: Option<PathBuf>,

    /// Execution mode override: single, multi, or auto
    #[arg(long)]
    mode: Option<String>,

    /// Task to execute; omit to start an interactive session
    #[arg(long)]
    task: Option<String>,

    /// Print the full execution result as JSON
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CadreError> {
    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    logging::init(&LoggingConfig::new().with_level(level))?;

    let config = match &cli.config {
        Some(path) => config::from_path(path)?,
        None => config::load()?,
    };

    check_credentials(&config)?;

    let mode_override = cli
        .mode
        .as_deref()
        .map(str::parse::<Mode>)
        .transpose()?;

    let orchestrator = Orchestrator::new(&config)?;

    if let Some(task) = &cli.task {
        let result = orchestrator.execute_task(task, mode_override).await?;
        render_result(&result, cli.verbose);
        return Ok(());
    }

    interactive(&orchestrator, mode_override, cli.verbose).await
}

/// Verifies the configured credential variable exists in the environment.
fn check_credentials(config: &CadreConfig) -> Result<(), CadreError> {
    if let Some(variable) = &config.credentials.api_key_env {
        if std::env::var(variable).is_err() {
            return Err(CadreError::missing_credential(variable));
        }
    }
    Ok(())
}

fn render_result(result: &ExecutionResult, verbose: bool) {
    println!("{}", result.answer);
    if verbose {
        match serde_json::to_string_pretty(result) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("error: failed to render result: {e}"),
        }
    }
}

async fn interactive(
    orchestrator: &Orchestrator,
    mode_override: Option<Mode>,
    verbose: bool,
) -> Result<(), CadreError> {
    println!(
        "cadre v{} — type 'exit' or 'quit' to end the session",
        env!("CARGO_PKG_VERSION")
    );

    let mut editor = Reedline::create();
    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("cadre".to_string()),
        DefaultPromptSegment::Empty,
    );

    loop {
        match editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => {
                let task = line.trim();
                if task.is_empty() {
                    continue;
                }
                if task.eq_ignore_ascii_case("exit") || task.eq_ignore_ascii_case("quit") {
                    break;
                }

                // A failed task ends the turn, not the session.
                match orchestrator.execute_task(task, mode_override).await {
                    Ok(result) => render_result(&result, verbose),
                    Err(e) => eprintln!("error: {e}"),
                }
            }
            Ok(Signal::CtrlC) => continue,
            Ok(Signal::CtrlD) => break,
            Ok(_) => continue,
            Err(e) => {
                return Err(CadreError::configuration(
                    "terminal",
                    format!("failed to read input: {e}"),
                ));
            }
        }
    }

    println!("Goodbye.");
    Ok(())
}
