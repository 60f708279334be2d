//! Terminal host for the shell core.
//!
//! Interactive by default; `-c`/a file argument runs script text instead.
//! `--json` captures the output lines and prints one report object, for
//! driving the shell from other tooling.

use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use clap::Parser;
use serde::Serialize;

use portal_shell::{
    BufferSink, ConsoleSink, InputError, InteractionSource, QueuedInput, ScriptOutcome, Shell,
    ShellOptions,
};

#[derive(Parser)]
#[command(name = "portal-shell", version, about = "A simulated command shell")]
struct Cli {
    /// Script file to run instead of starting interactively
    file: Option<std::path::PathBuf>,

    /// Script text to run directly
    #[arg(short = 'c', long = "command", conflicts_with = "file")]
    command: Option<String>,

    /// Emit captured output as one JSON object
    #[arg(long)]
    json: bool,

    /// Pacing delay after each pass-through command, in milliseconds
    #[arg(long, default_value_t = 50)]
    delay_ms: u64,
}

/// Sink that prints straight to the terminal.
struct StdoutSink;

impl ConsoleSink for StdoutSink {
    fn write_line(&self, text: &str) {
        println!("{}", text);
    }

    fn clear(&self) {
        // ANSI clear plus cursor home
        print!("\x1b[2J\x1b[H");
        let _ = std::io::stdout().flush();
    }
}

/// Interaction source backed by terminal stdin. A line feeds input
/// requests; for keypresses the first character of a line stands in, an
/// empty line counts as space so plain Enter continues a pause.
struct StdinInput;

async fn read_stdin_line() -> Option<String> {
    tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        match std::io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    })
    .await
    .ok()
    .flatten()
}

#[async_trait]
impl InteractionSource for StdinInput {
    async fn await_keypress(&self) -> Result<char, InputError> {
        let line = read_stdin_line().await.ok_or(InputError::Cancelled)?;
        Ok(line.chars().next().unwrap_or(' '))
    }

    async fn await_input_line(&self) -> Result<String, InputError> {
        read_stdin_line().await.ok_or(InputError::Cancelled)
    }
}

#[derive(Serialize)]
struct RunReport {
    lines: Vec<String>,
    outcome: &'static str,
}

fn outcome_label(outcome: ScriptOutcome) -> &'static str {
    match outcome {
        ScriptOutcome::Completed => "completed",
        ScriptOutcome::Cancelled => "cancelled",
    }
}

async fn run_script_mode(cli: &Cli, script: &str) -> Result<(), Box<dyn std::error::Error>> {
    let delay = Duration::from_millis(cli.delay_ms);
    if cli.json {
        let sink = Arc::new(BufferSink::new());
        let shell = Shell::new(ShellOptions {
            sink: Arc::clone(&sink) as Arc<dyn ConsoleSink>,
            input: Arc::new(QueuedInput::new()),
            command_delay: delay,
            seed_demo_files: true,
        })
        .await?;
        let outcome = shell.run_script(script).await;
        let report = RunReport { lines: sink.lines(), outcome: outcome_label(outcome) };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let shell = Shell::new(ShellOptions {
            sink: Arc::new(StdoutSink),
            input: Arc::new(StdinInput),
            command_delay: delay,
            seed_demo_files: true,
        })
        .await?;
        shell.run_script(script).await;
    }
    Ok(())
}

async fn run_interactive(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let shell = Shell::new(ShellOptions {
        sink: Arc::new(StdoutSink),
        input: Arc::new(StdinInput),
        command_delay: Duration::from_millis(cli.delay_ms),
        seed_demo_files: true,
    })
    .await?;
    shell.print_banner();

    loop {
        print!("{}", shell.prompt().await);
        std::io::stdout().flush()?;
        let Some(line) = read_stdin_line().await else {
            break;
        };
        if line.trim() == "exit" {
            break;
        }
        shell.submit(&line).await;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(script) = cli.command.clone() {
        return run_script_mode(&cli, &script).await;
    }
    if let Some(path) = cli.file.clone() {
        let script = std::fs::read_to_string(&path)?;
        return run_script_mode(&cli, &script).await;
    }
    run_interactive(&cli).await
}
