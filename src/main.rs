//! Detective Quest: The Mansion Mystery
//!
//! Walk the mansion, collect the clues, name the suspect.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use detective_quest::console::Console;
use detective_quest::{InvestigationSession, ReportGenerator, Result, RoomMap};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "detective-quest", version, about = "Explore the mansion and find the culprit")]
struct Args {
    /// How to print the final report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable colors
    #[arg(long)]
    plain: bool,

    /// Skip the banner and prompts
    #[arg(long, short)]
    quiet: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Erro: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let map = RoomMap::build().context("Erro ao construir o mapa")?;

    // With a JSON report, stdout carries only the JSON and the game talks on stderr.
    let (screen, color): (Box<dyn Write>, bool) = match args.format {
        OutputFormat::Text => (Box::new(io::stdout().lock()), io::stdout().is_terminal()),
        OutputFormat::Json => (Box::new(io::stderr().lock()), io::stderr().is_terminal()),
    };
    let mut console = Console::new(io::stdin().lock(), screen)
        .color(color && !args.plain)
        .quiet(args.quiet);

    console.banner()?;
    let mut session = InvestigationSession::new(&map);
    session.run(&mut console);
    if let Some(err) = console.take_error() {
        return Err(err).context("could not write to the terminal");
    }

    let generator = ReportGenerator::for_session(&session);
    match args.format {
        OutputFormat::Text => console.report(&generator.lines())?,
        OutputFormat::Json => {
            let mut out = io::stdout().lock();
            serde_json::to_writer_pretty(&mut out, &generator.report())?;
            writeln!(out)?;
            out.flush()?;
        }
    }

    let (clues, suspects) = session.into_parts();
    drop(map);
    drop(clues);
    drop(suspects);
    Ok(())
}
